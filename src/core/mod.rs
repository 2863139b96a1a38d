//! Core module containing the error taxonomy, store traits and the shared
//! lookup/validation contracts used by every handler

pub mod entity;
pub mod error;
pub mod lookup;
pub mod service;
pub mod validation;

pub use entity::EntityKind;
pub use error::{BizError, BizResult, ConstraintKind, StoreError, StoreResult};
pub use lookup::{FoundOr, deleted_or, integrity_anomaly};
pub use service::{CompanyService, InvoiceService};
pub use validation::{KeyPath, ValidatedJson};
