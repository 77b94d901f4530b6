//! Content records and normalization.
//!
//! A [`PartialContentRecord`] is what a content source hands the pipeline:
//! every field may be absent. [`normalize`] substitutes the documented
//! default for each missing field, so every stage past this one consumes a
//! fully populated [`ContentRecord`] and is a total function. Fallback
//! logic lives here and nowhere else.

use serde::Serialize;

use super::badge::{Badge, PartialBadge};

/// A named scalar shown on a card ("Target: 70%").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaField {
    pub name: String,
    pub value: String,
}

impl MetaField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A labeled bullet list nested inside a card ("Key Features", "Examples").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletGroup {
    pub label: String,
    pub items: Vec<String>,
}

impl BulletGroup {
    pub fn new(label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// A content record as supplied by a source, with every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialContentRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub badges: Option<Vec<PartialBadge>>,
    pub metadata: Option<Vec<MetaField>>,
    pub children: Option<Vec<BulletGroup>>,
}

/// A fully populated content record. Produced only by [`normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    pub description: String,
    pub badges: Vec<Badge>,
    pub metadata: Vec<MetaField>,
    pub children: Vec<BulletGroup>,
}

/// Substitutes documented defaults for every absent field.
///
/// Absent text becomes `""`, absent lists become empty, and badges with a
/// missing or unrecognized level resolve to their kind's default level.
/// This function never fails.
pub fn normalize(partial: PartialContentRecord) -> ContentRecord {
    ContentRecord {
        title: partial.title.unwrap_or_default(),
        description: partial.description.unwrap_or_default(),
        badges: partial
            .badges
            .unwrap_or_default()
            .iter()
            .map(Badge::resolve)
            .collect(),
        metadata: partial.metadata.unwrap_or_default(),
        children: partial.children.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::BadgeKind;
    use crate::domain::foundation::ColorToken;

    #[test]
    fn normalize_fills_every_absent_field() {
        let record = normalize(PartialContentRecord::default());
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert!(record.badges.is_empty());
        assert!(record.metadata.is_empty());
        assert!(record.children.is_empty());
    }

    #[test]
    fn normalize_keeps_present_fields() {
        let partial = PartialContentRecord {
            title: Some("Plugin Ecosystem".to_string()),
            description: Some("Install and create plugins.".to_string()),
            badges: Some(vec![PartialBadge::priority("high")]),
            metadata: Some(vec![MetaField::new("Assignee", "Platform Team")]),
            children: Some(vec![BulletGroup::new(
                "Acceptance Criteria",
                vec!["Plugin marketplace".to_string()],
            )]),
        };
        let record = normalize(partial);
        assert_eq!(record.title, "Plugin Ecosystem");
        assert_eq!(record.badges.len(), 1);
        assert_eq!(record.badges[0].color, ColorToken::Red);
        assert_eq!(record.metadata[0].value, "Platform Team");
        assert_eq!(record.children[0].items.len(), 1);
    }

    #[test]
    fn normalize_defaults_badge_levels() {
        let partial = PartialContentRecord {
            badges: Some(vec![
                PartialBadge {
                    kind: BadgeKind::Priority,
                    level: None,
                },
                PartialBadge {
                    kind: BadgeKind::Status,
                    level: Some("not-a-status".to_string()),
                },
            ]),
            ..Default::default()
        };
        let record = normalize(partial);
        assert_eq!(record.badges[0].label, "medium");
        assert_eq!(record.badges[1].label, "planned");
    }

    #[test]
    fn normalize_is_deterministic() {
        let partial = PartialContentRecord {
            title: Some("Same".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(partial.clone()), normalize(partial));
    }
}
