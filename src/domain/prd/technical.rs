//! Technical requirement entities.

use serde::Serialize;

use crate::domain::content::{PartialBadge, PartialContentRecord};

/// One technical requirement, flattened out of its category grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalRequirement {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

impl TechnicalRequirement {
    pub fn record(&self) -> PartialContentRecord {
        PartialContentRecord {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![
                PartialBadge::plain(&self.category),
                PartialBadge::priority(&self.priority),
                PartialBadge::status(&self.status),
            ]),
            metadata: None,
            children: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{normalize, BadgeKind};

    #[test]
    fn record_leads_with_a_category_badge() {
        let requirement = TechnicalRequirement {
            id: "platform-web".to_string(),
            category: "Platform".to_string(),
            name: "Web Application".to_string(),
            description: "Browser-based application.".to_string(),
            priority: "critical".to_string(),
            status: "implemented".to_string(),
        };
        let record = normalize(requirement.record());
        assert_eq!(record.badges[0].kind, BadgeKind::Plain);
        assert_eq!(record.badges[0].label, "Platform");
        // "implemented" canonicalizes to completed
        assert_eq!(record.badges[2].label, "completed");
    }
}
