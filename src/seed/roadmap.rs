//! Roadmap seed data.

use once_cell::sync::Lazy;

use crate::domain::prd::{Milestone, RoadmapItem};

fn milestone(name: &str, date: &str, completed: bool) -> Milestone {
    Milestone {
        name: name.to_string(),
        date: date.to_string(),
        completed,
    }
}

pub static ROADMAP_ITEMS: Lazy<Vec<RoadmapItem>> = Lazy::new(|| {
    vec![
        RoadmapItem {
            id: "q1-2024".to_string(),
            quarter: "Q1 2024".to_string(),
            title: "Core Platform Launch".to_string(),
            description: "Release MVP with essential editing features".to_string(),
            status: "in-progress".to_string(),
            priority: "high".to_string(),
            progress: 75.0,
            features: vec![
                "Basic code editor".to_string(),
                "Syntax highlighting".to_string(),
                "File management".to_string(),
                "User authentication".to_string(),
            ],
            milestones: vec![
                milestone("Alpha release", "2024-01-15", true),
                milestone("Beta testing", "2024-02-15", false),
                milestone("Public launch", "2024-03-15", false),
            ],
        },
        RoadmapItem {
            id: "q2-2024".to_string(),
            quarter: "Q2 2024".to_string(),
            title: "AI Integration".to_string(),
            description: "Add intelligent code completion and AI assistance".to_string(),
            status: "planned".to_string(),
            priority: "high".to_string(),
            progress: 0.0,
            features: vec![
                "AI code completion".to_string(),
                "Code generation".to_string(),
                "Bug detection".to_string(),
                "Performance suggestions".to_string(),
            ],
            milestones: vec![
                milestone("AI model training", "2024-04-01", false),
                milestone("Integration testing", "2024-05-15", false),
                milestone("Feature release", "2024-06-30", false),
            ],
        },
        RoadmapItem {
            id: "q3-2024".to_string(),
            quarter: "Q3 2024".to_string(),
            title: "Collaboration Features".to_string(),
            description: "Enable real-time collaborative editing".to_string(),
            status: "planned".to_string(),
            priority: "medium".to_string(),
            progress: 0.0,
            features: vec![
                "Real-time editing".to_string(),
                "Voice chat".to_string(),
                "Shared workspaces".to_string(),
                "Comment system".to_string(),
            ],
            milestones: vec![
                milestone("WebSocket infrastructure", "2024-07-15", false),
                milestone("Collaboration UI", "2024-08-15", false),
                milestone("Beta testing", "2024-09-30", false),
            ],
        },
        RoadmapItem {
            id: "q4-2024".to_string(),
            quarter: "Q4 2024".to_string(),
            title: "Enterprise Features".to_string(),
            description: "Add enterprise-grade security and deployment options".to_string(),
            status: "planned".to_string(),
            priority: "medium".to_string(),
            progress: 0.0,
            features: vec![
                "SSO integration".to_string(),
                "On-premise deployment".to_string(),
                "Advanced analytics".to_string(),
                "Custom integrations".to_string(),
            ],
            milestones: vec![
                milestone("Security audit", "2024-10-15", false),
                milestone("Enterprise pilot", "2024-11-15", false),
                milestone("General availability", "2024-12-31", false),
            ],
        },
    ]
});
