//! Feature module entities.

use serde::Serialize;

use crate::domain::content::{BulletGroup, MetaField, PartialBadge, PartialContentRecord};
use crate::domain::format::format_percentage;

/// One feature module of the product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub complexity: String,
    /// Implementation progress, 0-100.
    pub progress: f64,
    pub features: Vec<String>,
    pub dependencies: Vec<String>,
    pub estimated_effort: String,
    pub team: String,
}

impl FeatureModule {
    pub fn record(&self) -> PartialContentRecord {
        let mut children = vec![BulletGroup::new("Capabilities", self.features.clone())];
        if !self.dependencies.is_empty() {
            children.push(BulletGroup::new("Dependencies", self.dependencies.clone()));
        }
        PartialContentRecord {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![
                PartialBadge::priority(&self.priority),
                PartialBadge::status(&self.status),
                PartialBadge::complexity(&self.complexity),
            ]),
            metadata: Some(vec![
                MetaField::new("Progress", format_percentage(self.progress, 0)),
                MetaField::new("Estimated Effort", &self.estimated_effort),
                MetaField::new("Team", &self.team),
            ]),
            children: Some(children),
        }
    }
}
