//! Store traits for company and invoice operations
//!
//! Handlers never talk to a database directly: they receive these traits as
//! trait objects through the application state, so any backend (PostgreSQL,
//! the in-memory store, a test fake) can be injected.
//!
//! Point operations report "zero rows" as `None`/`false`, never as an error.
//! Turning that into a `NotFound` response is the handler's job.

use async_trait::async_trait;

use crate::core::error::StoreResult;
use crate::entities::company::{Company, CompanyChanges, CompanySummary, NewCompany};
use crate::entities::invoice::{Invoice, InvoiceSummary, NewInvoice};

/// Store operations on the `companies` table
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List all companies projected to `{code, name}`, in store order
    async fn list(&self) -> StoreResult<Vec<CompanySummary>>;

    /// Point query by code
    async fn get(&self, code: &str) -> StoreResult<Option<Company>>;

    /// Insert-returning
    async fn create(&self, company: NewCompany) -> StoreResult<Company>;

    /// Update-returning `name` and `description`; `None` when no row matched
    async fn update(&self, code: &str, changes: CompanyChanges) -> StoreResult<Option<Company>>;

    /// Delete-returning; `false` when no row matched
    async fn delete(&self, code: &str) -> StoreResult<bool>;
}

/// Store operations on the `invoices` table
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// List all invoices projected to `{id, comp_code}`, ordered by id ascending
    async fn list(&self) -> StoreResult<Vec<InvoiceSummary>>;

    /// Point query by id
    async fn get(&self, id: i32) -> StoreResult<Option<Invoice>>;

    /// Insert-returning; the store fills in id, paid and add_date
    async fn create(&self, invoice: NewInvoice) -> StoreResult<Invoice>;

    /// Update-returning `amt`; `None` when no row matched
    async fn update_amount(&self, id: i32, amt: f64) -> StoreResult<Option<Invoice>>;

    /// Delete-returning; `false` when no row matched
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}
