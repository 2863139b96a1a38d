//! Entity registry for managing entity descriptors and their CRUD routes

use axum::Router;

use super::state::AppState;
use crate::core::EntityKind;

/// Trait that describes how to build routes for an entity
///
/// Each entity (Company, Invoice) implements this trait to provide its
/// routes:
/// - GET /{plural}
/// - POST /{plural}
/// - GET|PUT|DELETE /{plural}/{key}
pub trait EntityDescriptor: Send + Sync {
    /// The entity kind served by these routes
    fn kind(&self) -> EntityKind;

    /// Build the routes for this entity, bound to the shared state
    fn build_routes(&self, state: AppState) -> Router;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// A descriptor for an already registered kind replaces the old one.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let kind = descriptor.kind();
        self.descriptors.retain(|existing| existing.kind() != kind);
        self.descriptors.push(descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self, state: &AppState) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes(state.clone()))
            })
    }

    /// Registered entity kinds, in registration order
    pub fn entity_kinds(&self) -> Vec<EntityKind> {
        self.descriptors.iter().map(|d| d.kind()).collect()
    }
}
