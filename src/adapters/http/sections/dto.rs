//! HTTP DTOs for the section endpoints.
//!
//! The section page itself serializes directly from the domain view model
//! (`Page`); only the listing needs a boundary type to resolve status
//! badges and format dates.

use serde::Serialize;

use crate::domain::content::{Badge, PartialBadge, SectionId};
use crate::domain::format::format_date;
use crate::domain::prd::SectionSummary;

/// Response for the section listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListResponse {
    pub sections: Vec<SectionSummaryView>,
}

impl SectionListResponse {
    pub fn from_summaries(summaries: Vec<SectionSummary>) -> Self {
        Self {
            sections: summaries
                .into_iter()
                .map(SectionSummaryView::from_domain)
                .collect(),
        }
    }
}

/// One section summary with its status badge resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummaryView {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub status: Badge,
    pub progress: f64,
    pub last_updated: String,
}

impl SectionSummaryView {
    fn from_domain(summary: SectionSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            status: Badge::resolve(&PartialBadge::status(summary.status)),
            progress: summary.progress,
            last_updated: format_date(&summary.last_updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ColorToken;

    #[test]
    fn summary_view_canonicalizes_loose_status_text() {
        let view = SectionSummaryView::from_domain(SectionSummary {
            id: SectionId::Technical,
            title: "Technical Requirements".to_string(),
            description: String::new(),
            status: "Draft".to_string(),
            progress: 60.0,
            last_updated: "2024-01-10".to_string(),
        });
        assert_eq!(view.status.label, "planned");
        assert_eq!(view.status.color, ColorToken::Gray);
        assert_eq!(view.last_updated, "Jan 10, 2024");
    }
}
