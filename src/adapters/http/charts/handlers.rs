//! HTTP handlers for the chart endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    GetMetricsChartHandler, GetRetentionChartHandler, GetRevenueChartHandler,
    GetUsageChartHandler,
};

use super::super::ContentAppState;
use super::dto::ChartResponse;

/// Get the monthly revenue projection chart.
///
/// GET /api/charts/revenue
pub async fn get_revenue_chart(State(state): State<ContentAppState>) -> impl IntoResponse {
    let data = GetRevenueChartHandler::new(state.source.clone()).handle().await;
    Json(ChartResponse::revenue(data))
}

/// Get the metric progress chart.
///
/// GET /api/charts/metrics
pub async fn get_metrics_chart(State(state): State<ContentAppState>) -> impl IntoResponse {
    let data = GetMetricsChartHandler::new(state.source.clone()).handle().await;
    Json(ChartResponse::metrics(data))
}

/// Get the feature adoption chart.
///
/// GET /api/charts/usage
pub async fn get_usage_chart(State(state): State<ContentAppState>) -> impl IntoResponse {
    let data = GetUsageChartHandler::new(state.source.clone()).handle().await;
    Json(ChartResponse::usage(data))
}

/// Get the cohort retention chart.
///
/// GET /api/charts/retention
pub async fn get_retention_chart(State(state): State<ContentAppState>) -> impl IntoResponse {
    let data = GetRetentionChartHandler::new(state.source.clone()).handle().await;
    Json(ChartResponse::retention(data))
}
