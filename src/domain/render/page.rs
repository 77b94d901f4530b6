//! Page composition - section layout plus static prose panels.

use serde::Serialize;

use super::layout::SectionLayout;
use crate::domain::content::SectionId;

/// A static explanatory block: heading, paragraphs, optional bullets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProseBlock {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

impl ProseBlock {
    pub fn paragraphs(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            bullets: Vec::new(),
        }
    }

    pub fn bullets(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
            bullets,
        }
    }
}

/// The static text of one section page: title, intro, and supplementary
/// panels. Supplied by the content source alongside the section's records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub title: String,
    pub intro: Option<ProseBlock>,
    pub panels: Vec<ProseBlock>,
}

/// A complete section page in fixed order: intro prose, the card grid,
/// then supplementary panels. Purely compositional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub section: SectionId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<ProseBlock>,
    pub layout: SectionLayout,
    pub panels: Vec<ProseBlock>,
}

impl Page {
    pub fn compose(
        section: SectionId,
        title: impl Into<String>,
        intro: Option<ProseBlock>,
        layout: SectionLayout,
        panels: Vec<ProseBlock>,
    ) -> Self {
        Self {
            section,
            title: title.into(),
            intro,
            layout,
            panels,
        }
    }

    /// Composes a page from its static text and assembled layout.
    pub fn from_text(section: SectionId, text: PageText, layout: SectionLayout) -> Self {
        Self {
            section,
            title: text.title,
            intro: text.intro,
            layout,
            panels: text.panels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::{assemble_section, CardStyle};

    #[test]
    fn compose_preserves_panel_order() {
        let layout = assemble_section(Vec::new(), &CardStyle::new("Item", false));
        let page = Page::compose(
            SectionId::Roadmap,
            "Future Enhancements & Roadmap",
            None,
            layout,
            vec![
                ProseBlock::bullets("Long-term Vision", vec!["AI-powered debugging".to_string()]),
                ProseBlock::paragraphs("Release Strategy", vec!["Two-week sprints.".to_string()]),
            ],
        );
        assert_eq!(page.panels[0].title, "Long-term Vision");
        assert_eq!(page.panels[1].title, "Release Strategy");
    }
}
