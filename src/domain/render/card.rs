//! Record rendering - one normalized record becomes one card.

use serde::Serialize;

use crate::domain::content::{Badge, BulletGroup, ContentRecord, MetaField};

/// Presentation hints for the cards of one section.
#[derive(Debug, Clone, Copy)]
pub struct CardStyle {
    /// Singular noun for this section's records ("Story", "Feature").
    pub noun: &'static str,
    /// Whether cards carry an ordinal eyebrow like "Story #3".
    pub numbered: bool,
}

impl CardStyle {
    pub const fn new(noun: &'static str, numbered: bool) -> Self {
        Self { noun, numbered }
    }
}

/// A self-contained visual unit describing one record.
///
/// Pure data: no I/O and no styling, only the structure a client renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Ordinal eyebrow ("Story #3"), present only for numbered sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    pub description: String,
    pub badges: Vec<Badge>,
    pub metadata: Vec<MetaField>,
    pub children: Vec<BulletGroup>,
}

/// Maps one normalized record and its position into a card.
///
/// Deterministic: identical inputs always yield the identical card. The
/// index is used only for the ordinal eyebrow. Empty titles and
/// descriptions are replaced with placeholder text here, at the single
/// point where display strings are decided.
pub fn render_record(record: &ContentRecord, index: usize, style: &CardStyle) -> Card {
    let eyebrow = if style.numbered {
        Some(format!("{} #{}", style.noun, index + 1))
    } else {
        None
    };
    let title = if record.title.is_empty() {
        format!("Untitled {}", style.noun)
    } else {
        record.title.clone()
    };
    let description = if record.description.is_empty() {
        "No description provided.".to_string()
    } else {
        record.description.clone()
    };
    Card {
        eyebrow,
        title,
        description,
        badges: record.badges.clone(),
        metadata: record.metadata.clone(),
        children: record.children.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{normalize, PartialBadge, PartialContentRecord};

    const STORY: CardStyle = CardStyle::new("Story", true);
    const FEATURE: CardStyle = CardStyle::new("Feature", false);

    fn story_record() -> ContentRecord {
        normalize(PartialContentRecord {
            title: Some("Real-time Collaboration".to_string()),
            description: Some("Teams edit code together.".to_string()),
            badges: Some(vec![PartialBadge::priority("medium")]),
            ..Default::default()
        })
    }

    #[test]
    fn numbered_sections_get_ordinal_eyebrows() {
        let card = render_record(&story_record(), 2, &STORY);
        assert_eq!(card.eyebrow.as_deref(), Some("Story #3"));
    }

    #[test]
    fn unnumbered_sections_have_no_eyebrow() {
        let card = render_record(&story_record(), 2, &FEATURE);
        assert!(card.eyebrow.is_none());
    }

    #[test]
    fn empty_title_gets_placeholder() {
        let record = normalize(PartialContentRecord::default());
        let card = render_record(&record, 0, &STORY);
        assert_eq!(card.title, "Untitled Story");
        assert_eq!(card.description, "No description provided.");
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = story_record();
        assert_eq!(
            render_record(&record, 1, &STORY),
            render_record(&record, 1, &STORY)
        );
    }
}
