//! Section assembly - an ordered record sequence becomes a card grid.

use serde::Serialize;

use super::card::{render_record, Card, CardStyle};
use crate::domain::content::{normalize, PartialContentRecord};

/// Fixed message shown when a section has no records.
pub const EMPTY_SECTION_MESSAGE: &str = "No items defined yet";

/// The assembled card grid for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLayout {
    pub cards: Vec<Card>,
    /// True when `cards` holds only the empty-section placeholder.
    pub is_placeholder: bool,
}

/// Normalizes and renders each record, preserving input order.
///
/// An empty sequence yields exactly one placeholder card instead of an
/// empty grid. This is the sole explicit edge-case branch in the pipeline.
pub fn assemble_section(records: Vec<PartialContentRecord>, style: &CardStyle) -> SectionLayout {
    if records.is_empty() {
        return SectionLayout {
            cards: vec![placeholder_card()],
            is_placeholder: true,
        };
    }
    let cards = records
        .into_iter()
        .enumerate()
        .map(|(index, partial)| render_record(&normalize(partial), index, style))
        .collect();
    SectionLayout {
        cards,
        is_placeholder: false,
    }
}

fn placeholder_card() -> Card {
    Card {
        eyebrow: None,
        title: EMPTY_SECTION_MESSAGE.to_string(),
        description: "Check back later for updates to this section.".to_string(),
        badges: Vec::new(),
        metadata: Vec::new(),
        children: Vec::new(),
    }
}
