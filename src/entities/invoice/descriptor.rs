//! Entity descriptor for Invoice

use axum::{Router, routing::get};

use super::handlers::{create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice};
use crate::core::EntityKind;
use crate::server::{AppState, EntityDescriptor};

/// Descriptor for the Invoice entity
pub struct InvoiceDescriptor;

impl EntityDescriptor for InvoiceDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Invoice
    }

    fn build_routes(&self, state: AppState) -> Router {
        let kind = self.kind();
        let collection = format!("/{}", kind.plural());
        let member = format!("/{}/{{{}}}", kind.plural(), kind.key_name());

        Router::new()
            .route(&collection, get(list_invoices).post(create_invoice))
            .route(
                &member,
                get(get_invoice).put(update_invoice).delete(delete_invoice),
            )
            .with_state(state)
    }
}
