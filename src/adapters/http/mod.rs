//! HTTP adapters - REST API implementations.
//!
//! Each content area has its own HTTP adapter for endpoint exposure.

pub mod charts;
pub mod error;
pub mod overview;
pub mod sections;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::ports::ContentSource;

pub use error::{ApiError, ErrorResponse};

/// Shared state for all content endpoints.
#[derive(Clone)]
pub struct ContentAppState {
    /// Content source backing every endpoint.
    pub source: Arc<dyn ContentSource>,
}

impl ContentAppState {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }
}

/// Create the complete API router.
///
/// Mounts all content areas under `/api` plus a liveness probe:
/// - `GET /api/overview`
/// - `GET /api/navigation`
/// - `GET /api/sections`
/// - `GET /api/sections/:id`
/// - `GET /api/charts/revenue`
/// - `GET /api/charts/metrics`
/// - `GET /api/charts/usage`
/// - `GET /api/charts/retention`
/// - `GET /health`
pub fn api_router(state: ContentAppState) -> Router {
    Router::new()
        .merge(overview::overview_routes())
        .merge(sections::section_routes())
        .nest("/api/charts", charts::chart_routes())
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
