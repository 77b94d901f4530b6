//! User story entities.

use serde::Serialize;

use crate::domain::content::{BulletGroup, MetaField, PartialBadge, PartialContentRecord};

/// One user story with its acceptance criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Loose level text; canonicalized by the badge lookup.
    pub priority: String,
    pub status: String,
    pub acceptance_criteria: Vec<String>,
    pub estimated_hours: f64,
    pub assignee: String,
}

impl UserStory {
    pub fn record(&self) -> PartialContentRecord {
        let children = if self.acceptance_criteria.is_empty() {
            None
        } else {
            Some(vec![BulletGroup::new(
                "Acceptance Criteria",
                self.acceptance_criteria.clone(),
            )])
        };
        PartialContentRecord {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![
                PartialBadge::priority(&self.priority),
                PartialBadge::status(&self.status),
            ]),
            metadata: Some(vec![
                MetaField::new("Assignee", &self.assignee),
                MetaField::new("Estimated Hours", format!("{}", self.estimated_hours)),
            ]),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::normalize;
    use crate::domain::foundation::ColorToken;

    fn story() -> UserStory {
        UserStory {
            id: "us-001".to_string(),
            title: "Code with Syntax Highlighting".to_string(),
            description: "As a developer, I want syntax highlighting.".to_string(),
            priority: "high".to_string(),
            status: "completed".to_string(),
            acceptance_criteria: vec!["Support for 20+ languages".to_string()],
            estimated_hours: 40.0,
            assignee: "Frontend Team".to_string(),
        }
    }

    #[test]
    fn record_carries_priority_and_status_badges() {
        let record = normalize(story().record());
        assert_eq!(record.badges.len(), 2);
        assert_eq!(record.badges[0].color, ColorToken::Red);
        assert_eq!(record.badges[1].color, ColorToken::Green);
    }

    #[test]
    fn record_omits_empty_criteria_group() {
        let mut story = story();
        story.acceptance_criteria.clear();
        let record = normalize(story.record());
        assert!(record.children.is_empty());
    }
}
