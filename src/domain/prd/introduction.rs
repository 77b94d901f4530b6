//! Introduction section entities.

use serde::Serialize;

use crate::domain::content::{MetaField, PartialContentRecord};
use crate::domain::format::format_percentage;

/// One target-audience segment; the introduction page's card records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSegment {
    pub segment: String,
    pub description: String,
    /// Share of the target audience, 0-100.
    pub share: f64,
    pub needs: Vec<String>,
}

impl AudienceSegment {
    pub fn record(&self) -> PartialContentRecord {
        PartialContentRecord {
            title: Some(self.segment.clone()),
            description: Some(self.description.clone()),
            badges: None,
            metadata: Some(vec![MetaField::new(
                "Audience Share",
                format_percentage(self.share, 0),
            )]),
            children: Some(vec![crate::domain::content::BulletGroup::new(
                "Key Needs",
                self.needs.clone(),
            )]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::normalize;

    #[test]
    fn record_formats_share_as_percentage() {
        let segment = AudienceSegment {
            segment: "Professional Developers".to_string(),
            description: "Experienced programmers on complex projects.".to_string(),
            share: 40.0,
            needs: vec!["Advanced debugging".to_string()],
        };
        let record = normalize(segment.record());
        assert_eq!(record.metadata[0].value, "40%");
        assert_eq!(record.children[0].label, "Key Needs");
    }
}
