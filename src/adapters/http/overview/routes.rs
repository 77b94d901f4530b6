//! Axum router configuration for the overview endpoints.

use axum::routing::get;
use axum::Router;

use super::super::ContentAppState;
use super::handlers::{get_navigation, get_overview};

/// Create the overview router.
///
/// # Routes
/// - `GET /api/overview` - Document overview with section progress
/// - `GET /api/navigation` - Navigation shell entries
pub fn overview_routes() -> Router<ContentAppState> {
    Router::new()
        .route("/api/overview", get(get_overview))
        .route("/api/navigation", get(get_navigation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _router = overview_routes();
    }
}
