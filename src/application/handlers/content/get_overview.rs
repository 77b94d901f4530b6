//! GetOverviewHandler - Query handler for the document overview.

use std::sync::Arc;

use crate::domain::content::bar_widths;
use crate::domain::foundation::Percentage;
use crate::domain::prd::{AppOverview, SectionSummary};
use crate::ports::ContentSource;

/// Aggregated overview: app facts plus each section's authoring progress
/// with its relative bar width already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewData {
    pub app: AppOverview,
    pub sections: Vec<SectionProgress>,
}

/// One section summary with its derived progress bar width.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionProgress {
    pub summary: SectionSummary,
    pub bar_width: Percentage,
}

/// Handler aggregating the overview page data.
pub struct GetOverviewHandler {
    source: Arc<dyn ContentSource>,
}

impl GetOverviewHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> OverviewData {
        let app = self.source.overview().await;
        let summaries = self.source.section_summaries().await;
        let progress: Vec<f64> = summaries.iter().map(|s| s.progress).collect();
        let widths = bar_widths(&progress);
        let sections = summaries
            .into_iter()
            .zip(widths)
            .map(|(summary, bar_width)| SectionProgress { summary, bar_width })
            .collect();
        OverviewData { app, sections }
    }
}
