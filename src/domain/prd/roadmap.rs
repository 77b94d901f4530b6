//! Roadmap entities.

use serde::Serialize;

use crate::domain::content::{BulletGroup, MetaField, PartialBadge, PartialContentRecord};
use crate::domain::format::{format_date, format_percentage};

/// A dated delivery milestone inside a roadmap phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub completed: bool,
}

impl Milestone {
    /// Bullet line, e.g. `"Alpha release - Jan 15, 2024 (completed)"`.
    pub fn display_line(&self) -> String {
        let suffix = if self.completed { " (completed)" } else { "" };
        format!("{} - {}{}", self.name, format_date(&self.date), suffix)
    }
}

/// One roadmap phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub quarter: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub progress: f64,
    pub features: Vec<String>,
    pub milestones: Vec<Milestone>,
}

impl RoadmapItem {
    pub fn record(&self) -> PartialContentRecord {
        let mut children = vec![BulletGroup::new("Key Features", self.features.clone())];
        if !self.milestones.is_empty() {
            children.push(BulletGroup::new(
                "Milestones",
                self.milestones.iter().map(Milestone::display_line).collect(),
            ));
        }
        PartialContentRecord {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![
                PartialBadge::plain(&self.quarter),
                PartialBadge::status(&self.status),
                PartialBadge::priority(&self.priority),
            ]),
            metadata: Some(vec![MetaField::new(
                "Progress",
                format_percentage(self.progress, 0),
            )]),
            children: Some(children),
        }
    }
}
