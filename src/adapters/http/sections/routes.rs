//! Axum router configuration for the section endpoints.

use axum::routing::get;
use axum::Router;

use super::super::ContentAppState;
use super::handlers::{get_section, list_sections};

/// Create the sections router.
///
/// # Routes
/// - `GET /api/sections` - List sections with authoring progress
/// - `GET /api/sections/:id` - Compose one section page
pub fn section_routes() -> Router<ContentAppState> {
    Router::new()
        .route("/api/sections", get(list_sections))
        .route("/api/sections/:id", get(get_section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _router = section_routes();
    }
}
