//! Shared application state

use std::sync::Arc;

use crate::core::{CompanyService, InvoiceService};

/// Store capabilities injected into every handler
///
/// Holds no request data of its own; all state lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyService>,
    pub invoices: Arc<dyn InvoiceService>,
}

impl AppState {
    /// Build state from a single backend implementing both store traits
    pub fn new<S>(store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let store = Arc::new(store);
        Self {
            companies: store.clone(),
            invoices: store,
        }
    }

    /// Build state from separately supplied stores
    pub fn from_parts(
        companies: Arc<dyn CompanyService>,
        invoices: Arc<dyn InvoiceService>,
    ) -> Self {
        Self {
            companies,
            invoices,
        }
    }
}
