//! In-memory ContentSource over the hardcoded seed data.

use async_trait::async_trait;

use crate::domain::content::{ChartPoint, PartialContentRecord, SectionId};
use crate::domain::prd::{AppOverview, NavigationItem, SectionSummary};
use crate::domain::render::PageText;
use crate::ports::ContentSource;
use crate::seed;

/// Serves the seed statics. Stateless and trivially cloneable; every call
/// reads the same immutable data.
#[derive(Debug, Clone, Default)]
pub struct SeedContentSource;

impl SeedContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for SeedContentSource {
    async fn overview(&self) -> AppOverview {
        seed::APP_OVERVIEW.clone()
    }

    async fn navigation(&self) -> Vec<NavigationItem> {
        seed::NAVIGATION.clone()
    }

    async fn section_summaries(&self) -> Vec<SectionSummary> {
        seed::SECTION_SUMMARIES.clone()
    }

    async fn records(&self, section: SectionId) -> Vec<PartialContentRecord> {
        match section {
            SectionId::Introduction => {
                seed::AUDIENCE_SEGMENTS.iter().map(|s| s.record()).collect()
            }
            SectionId::UserStories => seed::USER_STORIES.iter().map(|s| s.record()).collect(),
            SectionId::Features => seed::FEATURE_MODULES.iter().map(|f| f.record()).collect(),
            SectionId::Technical => seed::TECHNICAL_REQUIREMENTS
                .iter()
                .map(|r| r.record())
                .collect(),
            SectionId::UiUx => seed::DESIGN_PRINCIPLES
                .iter()
                .map(|p| p.record())
                .chain(seed::WIREFRAME_CONCEPTS.iter().map(|w| w.record()))
                .collect(),
            SectionId::Monetization => seed::PRICING_PLANS.iter().map(|p| p.record()).collect(),
            SectionId::Roadmap => seed::ROADMAP_ITEMS.iter().map(|i| i.record()).collect(),
            SectionId::Metrics => seed::SUCCESS_METRICS.iter().map(|m| m.record()).collect(),
        }
    }

    async fn page_text(&self, section: SectionId) -> PageText {
        seed::page_text(section)
    }

    async fn revenue_points(&self) -> Vec<ChartPoint> {
        seed::REVENUE_PROJECTIONS.iter().map(|p| p.point()).collect()
    }

    async fn metric_points(&self) -> Vec<ChartPoint> {
        seed::SUCCESS_METRICS.iter().map(|m| m.point()).collect()
    }

    async fn feature_usage_points(&self) -> Vec<ChartPoint> {
        seed::FEATURE_USAGE.iter().map(|u| u.point()).collect()
    }

    async fn retention_points(&self) -> Vec<ChartPoint> {
        seed::RETENTION.iter().map(|r| r.point()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_section_has_records() {
        let source = SeedContentSource::new();
        for section in SectionId::ALL {
            let records = source.records(section).await;
            assert!(!records.is_empty(), "section {section} should be seeded");
        }
    }

    #[tokio::test]
    async fn chart_series_match_seed_lengths() {
        let source = SeedContentSource::new();
        assert_eq!(source.revenue_points().await.len(), 12);
        assert_eq!(source.metric_points().await.len(), 5);
        assert_eq!(source.feature_usage_points().await.len(), 6);
        assert_eq!(source.retention_points().await.len(), 6);
    }

    #[tokio::test]
    async fn ui_ux_merges_principles_and_wireframes() {
        let source = SeedContentSource::new();
        let records = source.records(SectionId::UiUx).await;
        assert_eq!(
            records.len(),
            seed::DESIGN_PRINCIPLES.len() + seed::WIREFRAME_CONCEPTS.len()
        );
    }
}
