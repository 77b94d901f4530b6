//! UI/UX section entities: design principles and wireframe concepts.

use serde::Serialize;

use crate::domain::content::{BulletGroup, PartialBadge, PartialContentRecord};

/// One design principle with concrete examples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPrinciple {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
    pub priority: String,
}

impl DesignPrinciple {
    pub fn record(&self) -> PartialContentRecord {
        PartialContentRecord {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![PartialBadge::priority(&self.priority)]),
            metadata: None,
            children: Some(vec![BulletGroup::new("Examples", self.examples.clone())]),
        }
    }
}

/// One wireframe concept and the screen elements it calls out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireframeConcept {
    pub id: String,
    pub name: String,
    pub description: String,
    pub elements: Vec<String>,
    pub priority: String,
    pub status: String,
}

impl WireframeConcept {
    pub fn record(&self) -> PartialContentRecord {
        PartialContentRecord {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![
                PartialBadge::priority(&self.priority),
                PartialBadge::status(&self.status),
            ]),
            metadata: None,
            children: Some(vec![BulletGroup::new("Screen Elements", self.elements.clone())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::normalize;

    #[test]
    fn wireframe_status_synonyms_canonicalize() {
        let concept = WireframeConcept {
            id: "main-layout".to_string(),
            name: "Main Editor Layout".to_string(),
            description: "Primary workspace.".to_string(),
            elements: vec!["File explorer".to_string()],
            priority: "critical".to_string(),
            status: "approved".to_string(),
        };
        let record = normalize(concept.record());
        assert_eq!(record.badges[1].label, "completed");
    }
}
