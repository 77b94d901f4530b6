//! Document-level entities: app overview, section summaries, navigation.

use serde::Serialize;

use crate::domain::content::SectionId;

/// Headline facts about the product the PRD describes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOverview {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub version: String,
    /// ISO `YYYY-MM-DD`; formatted for display by the HTTP layer.
    pub last_updated: String,
    pub status: String,
    pub team: String,
    pub estimated_launch: String,
}

/// Per-section authoring progress, shown on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    /// Loose status text; canonicalized by the badge lookup.
    pub status: String,
    /// Authoring progress, 0-100.
    pub progress: f64,
    pub last_updated: String,
}

/// One entry in the navigation shell. The pipeline neither generates nor
/// validates these paths; they are pass-through shell data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    pub path: String,
    pub icon: String,
}
