//! App overview and per-section authoring progress seed data.

use once_cell::sync::Lazy;

use crate::domain::content::SectionId;
use crate::domain::prd::{AppOverview, SectionSummary};

pub static APP_OVERVIEW: Lazy<AppOverview> = Lazy::new(|| AppOverview {
    title: "CodeCraft Pro".to_string(),
    subtitle: "Professional Code Editor & Development Environment".to_string(),
    description: "A comprehensive coding application designed for developers of all \
                  skill levels, featuring intelligent code completion, collaborative \
                  editing, and integrated development tools."
        .to_string(),
    version: "1.0.0".to_string(),
    last_updated: "2024-01-15".to_string(),
    status: "In Development".to_string(),
    team: "CodeCraft Development Team".to_string(),
    estimated_launch: "Q2 2024".to_string(),
});

fn summary(
    id: SectionId,
    title: &str,
    description: &str,
    status: &str,
    progress: f64,
    last_updated: &str,
) -> SectionSummary {
    SectionSummary {
        id,
        title: title.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        progress,
        last_updated: last_updated.to_string(),
    }
}

pub static SECTION_SUMMARIES: Lazy<Vec<SectionSummary>> = Lazy::new(|| {
    vec![
        summary(
            SectionId::Introduction,
            "Introduction",
            "Project overview, purpose, scope, and target audience",
            "complete",
            100.0,
            "2024-01-15",
        ),
        summary(
            SectionId::UserStories,
            "User Stories",
            "Detailed user scenarios and use cases",
            "in-progress",
            85.0,
            "2024-01-14",
        ),
        summary(
            SectionId::Features,
            "Features",
            "Core functionalities and feature modules",
            "in-progress",
            75.0,
            "2024-01-13",
        ),
        summary(
            SectionId::Technical,
            "Technical Requirements",
            "Platform, languages, integrations, and performance specs",
            "draft",
            60.0,
            "2024-01-12",
        ),
        summary(
            SectionId::UiUx,
            "UI/UX Design",
            "Design principles and wireframe concepts",
            "draft",
            45.0,
            "2024-01-11",
        ),
        summary(
            SectionId::Monetization,
            "Monetization",
            "Pricing models and revenue strategies",
            "draft",
            30.0,
            "2024-01-10",
        ),
        summary(
            SectionId::Roadmap,
            "Roadmap",
            "Future enhancements and development timeline",
            "draft",
            25.0,
            "2024-01-09",
        ),
        summary(
            SectionId::Metrics,
            "Success Metrics",
            "KPIs and success measurement criteria",
            "draft",
            20.0,
            "2024-01-08",
        ),
    ]
});
