//! HTTP handlers for the section endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    GetSectionPageHandler, GetSectionPageQuery, ListSectionsHandler,
};
use crate::domain::content::SectionId;

use super::super::error::ApiError;
use super::super::ContentAppState;
use super::dto::SectionListResponse;

/// List every section with its authoring progress.
///
/// GET /api/sections
pub async fn list_sections(State(state): State<ContentAppState>) -> impl IntoResponse {
    let summaries = ListSectionsHandler::new(state.source.clone()).handle().await;
    Json(SectionListResponse::from_summaries(summaries))
}

/// Compose one section page.
///
/// GET /api/sections/:id
///
/// An unknown section id is the one routing fault the pipeline can hit;
/// everything past this parse is total.
pub async fn get_section(
    State(state): State<ContentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let section = SectionId::parse(&id).map_err(|_| ApiError::NotFound {
        resource: "Section",
        id,
    })?;
    let page = GetSectionPageHandler::new(state.source.clone())
        .handle(GetSectionPageQuery { section })
        .await;
    Ok(Json(page))
}
