//! User stories seed data.

use once_cell::sync::Lazy;

use crate::domain::prd::UserStory;

pub static USER_STORIES: Lazy<Vec<UserStory>> = Lazy::new(|| {
    vec![
        UserStory {
            id: "us-001".to_string(),
            title: "Code with Syntax Highlighting".to_string(),
            description: "As a developer, I want syntax highlighting for multiple \
                          programming languages so that I can easily read and understand \
                          my code."
                .to_string(),
            priority: "high".to_string(),
            status: "completed".to_string(),
            acceptance_criteria: vec![
                "Support for 20+ programming languages".to_string(),
                "Customizable color themes".to_string(),
                "Real-time syntax validation".to_string(),
            ],
            estimated_hours: 40.0,
            assignee: "Frontend Team".to_string(),
        },
        UserStory {
            id: "us-002".to_string(),
            title: "Intelligent Code Completion".to_string(),
            description: "As a developer, I want intelligent code completion suggestions \
                          so that I can write code faster and with fewer errors."
                .to_string(),
            priority: "high".to_string(),
            status: "in-progress".to_string(),
            acceptance_criteria: vec![
                "Context-aware suggestions".to_string(),
                "Support for popular frameworks".to_string(),
                "Machine learning-based recommendations".to_string(),
            ],
            estimated_hours: 80.0,
            assignee: "AI Team".to_string(),
        },
        UserStory {
            id: "us-003".to_string(),
            title: "Real-time Collaboration".to_string(),
            description: "As a team lead, I want real-time collaborative editing so that \
                          my team can work together on code simultaneously."
                .to_string(),
            priority: "medium".to_string(),
            status: "planned".to_string(),
            acceptance_criteria: vec![
                "Multiple users can edit simultaneously".to_string(),
                "Live cursor tracking".to_string(),
                "Conflict resolution system".to_string(),
            ],
            estimated_hours: 120.0,
            assignee: "Backend Team".to_string(),
        },
        UserStory {
            id: "us-004".to_string(),
            title: "Version Control Integration".to_string(),
            description: "As a developer, I want integrated Git support so that I can \
                          manage my code versions without leaving the editor."
                .to_string(),
            priority: "high".to_string(),
            status: "in-progress".to_string(),
            acceptance_criteria: vec![
                "Git commands in UI".to_string(),
                "Visual diff viewer".to_string(),
                "Branch management".to_string(),
            ],
            estimated_hours: 60.0,
            assignee: "DevOps Team".to_string(),
        },
        UserStory {
            id: "us-005".to_string(),
            title: "Plugin Ecosystem".to_string(),
            description: "As a power user, I want to install and create plugins so that \
                          I can extend the editor's functionality."
                .to_string(),
            priority: "medium".to_string(),
            status: "planned".to_string(),
            acceptance_criteria: vec![
                "Plugin marketplace".to_string(),
                "Plugin development API".to_string(),
                "Easy installation process".to_string(),
            ],
            estimated_hours: 100.0,
            assignee: "Platform Team".to_string(),
        },
    ]
});
