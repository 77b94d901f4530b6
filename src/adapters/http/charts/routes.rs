//! Axum router configuration for the chart endpoints.

use axum::routing::get;
use axum::Router;

use super::super::ContentAppState;
use super::handlers::{
    get_metrics_chart, get_retention_chart, get_revenue_chart, get_usage_chart,
};

/// Create the charts router.
///
/// Suitable for mounting at `/api/charts`.
///
/// # Routes
/// - `GET /revenue` - Monthly revenue projection series
/// - `GET /metrics` - Metric progress series
/// - `GET /usage` - Feature adoption series
/// - `GET /retention` - Cohort retention series
pub fn chart_routes() -> Router<ContentAppState> {
    Router::new()
        .route("/revenue", get(get_revenue_chart))
        .route("/metrics", get(get_metrics_chart))
        .route("/usage", get(get_usage_chart))
        .route("/retention", get(get_retention_chart))
}
