//! GetSectionPageHandler - Query handler composing one section page.
//!
//! Runs the full pipeline for a section: fetch records, normalize, render
//! cards, assemble the layout, and wire in the static prose.

use std::sync::Arc;

use crate::domain::content::SectionId;
use crate::domain::render::{assemble_section, CardStyle, Page};
use crate::ports::ContentSource;

/// Query to compose the page of one section.
#[derive(Debug, Clone, Copy)]
pub struct GetSectionPageQuery {
    pub section: SectionId,
}

/// Handler composing a full section page from the content source.
pub struct GetSectionPageHandler {
    source: Arc<dyn ContentSource>,
}

impl GetSectionPageHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: GetSectionPageQuery) -> Page {
        let records = self.source.records(query.section).await;
        let text = self.source.page_text(query.section).await;
        let layout = assemble_section(records, &card_style(query.section));
        Page::from_text(query.section, text, layout)
    }
}

/// Presentation hints per section. Only user stories and roadmap phases
/// carry ordinal eyebrows.
fn card_style(section: SectionId) -> CardStyle {
    match section {
        SectionId::Introduction => CardStyle::new("Segment", false),
        SectionId::UserStories => CardStyle::new("Story", true),
        SectionId::Features => CardStyle::new("Feature", false),
        SectionId::Technical => CardStyle::new("Requirement", false),
        SectionId::UiUx => CardStyle::new("Concept", false),
        SectionId::Monetization => CardStyle::new("Plan", false),
        SectionId::Roadmap => CardStyle::new("Phase", true),
        SectionId::Metrics => CardStyle::new("Metric", false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeedContentSource;
    use crate::domain::content::{ChartPoint, PartialContentRecord};
    use crate::domain::prd::{AppOverview, NavigationItem, SectionSummary};
    use crate::domain::render::{PageText, EMPTY_SECTION_MESSAGE};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    /// Source with no records in any section.
    struct EmptyContentSource;

    #[async_trait]
    impl ContentSource for EmptyContentSource {
        async fn overview(&self) -> AppOverview {
            AppOverview {
                title: String::new(),
                subtitle: String::new(),
                description: String::new(),
                version: String::new(),
                last_updated: String::new(),
                status: String::new(),
                team: String::new(),
                estimated_launch: String::new(),
            }
        }

        async fn navigation(&self) -> Vec<NavigationItem> {
            Vec::new()
        }

        async fn section_summaries(&self) -> Vec<SectionSummary> {
            Vec::new()
        }

        async fn records(&self, _section: SectionId) -> Vec<PartialContentRecord> {
            Vec::new()
        }

        async fn page_text(&self, section: SectionId) -> PageText {
            PageText {
                title: section.as_str().to_string(),
                intro: None,
                panels: Vec::new(),
            }
        }

        async fn revenue_points(&self) -> Vec<ChartPoint> {
            Vec::new()
        }

        async fn metric_points(&self) -> Vec<ChartPoint> {
            Vec::new()
        }

        async fn feature_usage_points(&self) -> Vec<ChartPoint> {
            Vec::new()
        }

        async fn retention_points(&self) -> Vec<ChartPoint> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn empty_section_composes_placeholder_page() {
        let handler = GetSectionPageHandler::new(Arc::new(EmptyContentSource));
        let page = handler
            .handle(GetSectionPageQuery {
                section: SectionId::Roadmap,
            })
            .await;
        assert!(page.layout.is_placeholder);
        assert_eq!(page.layout.cards.len(), 1);
        assert_eq!(page.layout.cards[0].title, EMPTY_SECTION_MESSAGE);
    }

    #[tokio::test]
    async fn seeded_user_stories_render_numbered_cards() {
        let handler = GetSectionPageHandler::new(Arc::new(SeedContentSource::new()));
        let page = handler
            .handle(GetSectionPageQuery {
                section: SectionId::UserStories,
            })
            .await;
        assert!(!page.layout.is_placeholder);
        assert_eq!(page.layout.cards[0].eyebrow.as_deref(), Some("Story #1"));
        assert_eq!(page.title, "User Stories");
    }

    #[tokio::test]
    async fn roadmap_page_carries_vision_and_strategy_panels() {
        let handler = GetSectionPageHandler::new(Arc::new(SeedContentSource::new()));
        let page = handler
            .handle(GetSectionPageQuery {
                section: SectionId::Roadmap,
            })
            .await;
        let titles: Vec<&str> = page.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Long-term Vision", "Release Strategy"]);
    }

    #[tokio::test]
    async fn composition_is_deterministic() {
        let handler = GetSectionPageHandler::new(Arc::new(SeedContentSource::new()));
        let query = GetSectionPageQuery {
            section: SectionId::Features,
        };
        assert_eq!(handler.handle(query).await, handler.handle(query).await);
    }
}
