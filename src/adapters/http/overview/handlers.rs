//! HTTP handlers for the overview and navigation endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{GetNavigationHandler, GetOverviewHandler};

use super::super::ContentAppState;
use super::dto::{NavigationResponse, OverviewResponse};

/// Get the document overview with per-section progress.
///
/// GET /api/overview
pub async fn get_overview(State(state): State<ContentAppState>) -> impl IntoResponse {
    let data = GetOverviewHandler::new(state.source.clone()).handle().await;
    Json(OverviewResponse::from_data(data))
}

/// Get the navigation shell entries.
///
/// GET /api/navigation
pub async fn get_navigation(State(state): State<ContentAppState>) -> impl IntoResponse {
    let items = GetNavigationHandler::new(state.source.clone()).handle().await;
    Json(NavigationResponse { items })
}
