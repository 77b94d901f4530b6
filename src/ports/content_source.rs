//! ContentSource port - named, ordered record sequences keyed by section.

use async_trait::async_trait;

use crate::domain::content::{ChartPoint, PartialContentRecord, SectionId};
use crate::domain::prd::{AppOverview, NavigationItem, SectionSummary};
use crate::domain::render::PageText;

/// Read-only access to the document's content.
///
/// Contract: every method returns a concrete (possibly empty) sequence,
/// never an absence. The pipeline renders an empty sequence as a
/// placeholder section; it has no notion of a missing one.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Headline facts about the product.
    async fn overview(&self) -> AppOverview;

    /// Navigation shell entries, in display order.
    async fn navigation(&self) -> Vec<NavigationItem>;

    /// Per-section authoring progress, in display order.
    async fn section_summaries(&self) -> Vec<SectionSummary>;

    /// The ordered records of one section.
    async fn records(&self, section: SectionId) -> Vec<PartialContentRecord>;

    /// The static prose of one section page.
    async fn page_text(&self, section: SectionId) -> PageText;

    /// Monthly revenue projection series.
    async fn revenue_points(&self) -> Vec<ChartPoint>;

    /// Metric progress series, one point per success metric.
    async fn metric_points(&self) -> Vec<ChartPoint>;

    /// Feature adoption series, one point per feature.
    async fn feature_usage_points(&self) -> Vec<ChartPoint>;

    /// Cohort retention series, one point per period after signup.
    async fn retention_points(&self) -> Vec<ChartPoint>;
}
