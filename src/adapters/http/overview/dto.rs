//! HTTP DTOs for the overview and navigation endpoints.
//!
//! These types define the JSON response structure for the document-level
//! API. Dates are formatted and status badges resolved here, at the
//! boundary, so clients receive display-ready values.

use serde::Serialize;

use crate::application::handlers::{OverviewData, SectionProgress};
use crate::domain::content::{Badge, PartialBadge, SectionId};
use crate::domain::format::format_date;
use crate::domain::foundation::Percentage;
use crate::domain::prd::{AppOverview, NavigationItem};

/// Response for the overview page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub app: AppOverviewView,
    pub sections: Vec<SectionProgressView>,
}

impl OverviewResponse {
    pub fn from_data(data: OverviewData) -> Self {
        Self {
            app: AppOverviewView::from_domain(data.app),
            sections: data
                .sections
                .into_iter()
                .map(SectionProgressView::from_domain)
                .collect(),
        }
    }
}

/// App headline facts with the last-updated date already formatted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOverviewView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub version: String,
    pub last_updated: String,
    pub status: String,
    pub team: String,
    pub estimated_launch: String,
}

impl AppOverviewView {
    fn from_domain(app: AppOverview) -> Self {
        Self {
            title: app.title,
            subtitle: app.subtitle,
            description: app.description,
            version: app.version,
            last_updated: format_date(&app.last_updated),
            status: app.status,
            team: app.team,
            estimated_launch: app.estimated_launch,
        }
    }
}

/// One section's authoring progress: resolved status badge, raw progress
/// value, and the derived bar width.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgressView {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub status: Badge,
    pub progress: f64,
    pub bar_width: Percentage,
    pub last_updated: String,
}

impl SectionProgressView {
    fn from_domain(progress: SectionProgress) -> Self {
        let summary = progress.summary;
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            status: Badge::resolve(&PartialBadge::status(summary.status)),
            progress: summary.progress,
            bar_width: progress.bar_width,
            last_updated: format_date(&summary.last_updated),
        }
    }
}

/// Response for the navigation shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub items: Vec<NavigationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ColorToken;
    use crate::domain::prd::SectionSummary;

    #[test]
    fn section_view_resolves_status_and_formats_date() {
        let view = SectionProgressView::from_domain(SectionProgress {
            summary: SectionSummary {
                id: SectionId::Features,
                title: "Feature Specifications".to_string(),
                description: "Core modules".to_string(),
                status: "in-progress".to_string(),
                progress: 75.0,
                last_updated: "2024-01-12".to_string(),
            },
            bar_width: Percentage::new(75.0),
        });
        assert_eq!(view.status.label, "in-progress");
        assert_eq!(view.status.color, ColorToken::Blue);
        assert_eq!(view.last_updated, "Jan 12, 2024");
    }

    #[test]
    fn overview_view_formats_the_update_date() {
        let view = AppOverviewView::from_domain(AppOverview {
            title: "CodeCraft Pro".to_string(),
            subtitle: String::new(),
            description: String::new(),
            version: "1.0.0".to_string(),
            last_updated: "2024-01-15".to_string(),
            status: "In Development".to_string(),
            team: String::new(),
            estimated_launch: String::new(),
        });
        assert_eq!(view.last_updated, "Jan 15, 2024");
    }
}
