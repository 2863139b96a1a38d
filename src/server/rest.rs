//! REST exposure: entity routes plus health checks, JSON 404 fallbacks and
//! request tracing

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::entity_registry::EntityRegistry;
use super::state::AppState;
use crate::core::BizError;

pub struct RestExposure;

impl RestExposure {
    /// Build the full REST router
    ///
    /// Unknown paths and unrouted methods on known paths both answer with
    /// the JSON `NotFound` body.
    pub fn build_router(registry: &EntityRegistry, state: &AppState) -> Router {
        Self::health_routes()
            .merge(registry.build_routes(state))
            .method_not_allowed_fallback(Self::route_not_found)
            .fallback(Self::route_not_found)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "biztime"
        }))
    }

    async fn route_not_found() -> BizError {
        BizError::NotFound("Not Found".to_string())
    }
}
