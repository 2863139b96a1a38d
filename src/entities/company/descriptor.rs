//! Entity descriptor for Company

use axum::{Router, routing::get};

use super::handlers::{create_company, delete_company, get_company, list_companies, update_company};
use crate::core::EntityKind;
use crate::server::{AppState, EntityDescriptor};

/// Descriptor for the Company entity
pub struct CompanyDescriptor;

impl EntityDescriptor for CompanyDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Company
    }

    fn build_routes(&self, state: AppState) -> Router {
        let kind = self.kind();
        let collection = format!("/{}", kind.plural());
        let member = format!("/{}/{{{}}}", kind.plural(), kind.key_name());

        Router::new()
            .route(&collection, get(list_companies).post(create_company))
            .route(
                &member,
                get(get_company).put(update_company).delete(delete_company),
            )
            .with_state(state)
    }
}
