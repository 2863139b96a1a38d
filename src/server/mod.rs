//! Server module: shared state, entity route registration and the HTTP
//! server builder

pub mod builder;
pub mod entity_registry;
pub mod rest;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use rest::RestExposure;
pub use state::AppState;
