//! Router construction.

use crate::core::gateway::CommandGateway;
use crate::core::RepositoryHost;
use crate::http::handlers;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const QUERY_PATH: &str = "/mcp/query";
pub const HEALTH_PATH: &str = "/health";

/// Builds the application router around a shared gateway.
pub fn create_router<H: RepositoryHost + 'static>(gateway: CommandGateway<H>) -> Router {
    Router::new()
        .route(QUERY_PATH, post(handlers::query::<H>))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(gateway))
}
