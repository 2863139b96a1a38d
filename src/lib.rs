//! # biztime
//!
//! A small REST API for companies and their invoices, backed by a SQL store.
//!
//! ## Routes
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | /companies | `{companies: [{code, name}]}` |
//! | GET | /companies/{code} | `{company: {code, name, description}}` |
//! | POST | /companies | 201 `{company: {...}}` |
//! | PUT | /companies/{code} | `{company: {...}}` |
//! | DELETE | /companies/{code} | `{status: "deleted"}` |
//! | GET | /invoices | `{invoices: [{id, comp_code}]}` ordered by id |
//! | GET | /invoices/{id} | `{invoice: {..., company: {...}}}` |
//! | POST | /invoices | 201 `{invoice: {...}}` |
//! | PUT | /invoices/{id} | `{invoice: {...}}` |
//! | DELETE | /invoices/{id} | `{status: "deleted"}` |
//!
//! Failures are returned as `{error: {message, status}}` with status 404
//! (missing key), 400 (bad input) or 500 (store failure).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BizError, BizResult, CompanyService, ConstraintKind, EntityKind, FoundOr, InvoiceService,
        StoreError, StoreResult, ValidatedJson,
    };

    // === Entities ===
    pub use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
    pub use crate::entities::invoice::{
        Invoice, InvoiceAmount, InvoiceDetail, InvoiceSummary, NewInvoice,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{DatabaseConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
