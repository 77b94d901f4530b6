//! UI/UX section seed data: design principles and wireframe concepts.

use once_cell::sync::Lazy;

use crate::domain::prd::{DesignPrinciple, WireframeConcept};

pub static DESIGN_PRINCIPLES: Lazy<Vec<DesignPrinciple>> = Lazy::new(|| {
    vec![
        DesignPrinciple {
            id: "simplicity".to_string(),
            title: "Simplicity First".to_string(),
            description: "Clean, uncluttered interface that focuses on the code".to_string(),
            examples: vec![
                "Minimal toolbar".to_string(),
                "Hidden panels by default".to_string(),
                "Keyboard-first navigation".to_string(),
            ],
            priority: "high".to_string(),
        },
        DesignPrinciple {
            id: "accessibility".to_string(),
            title: "Universal Accessibility".to_string(),
            description: "Ensure the application is usable by developers with disabilities"
                .to_string(),
            examples: vec![
                "Screen reader support".to_string(),
                "High contrast themes".to_string(),
                "Keyboard navigation".to_string(),
            ],
            priority: "high".to_string(),
        },
        DesignPrinciple {
            id: "customization".to_string(),
            title: "Extensive Customization".to_string(),
            description: "Allow users to personalize their development environment"
                .to_string(),
            examples: vec![
                "Custom themes".to_string(),
                "Configurable shortcuts".to_string(),
                "Layout preferences".to_string(),
            ],
            priority: "medium".to_string(),
        },
        DesignPrinciple {
            id: "performance".to_string(),
            title: "Performance Focused".to_string(),
            description: "Responsive interface that doesn't slow down the development \
                          workflow"
                .to_string(),
            examples: vec![
                "Lazy loading".to_string(),
                "Virtual scrolling".to_string(),
                "Optimized rendering".to_string(),
            ],
            priority: "high".to_string(),
        },
    ]
});

pub static WIREFRAME_CONCEPTS: Lazy<Vec<WireframeConcept>> = Lazy::new(|| {
    vec![
        WireframeConcept {
            id: "main-layout".to_string(),
            name: "Main Editor Layout".to_string(),
            description: "Primary workspace with editor, sidebar, and panels".to_string(),
            elements: vec![
                "File explorer".to_string(),
                "Code editor".to_string(),
                "Terminal".to_string(),
                "Status bar".to_string(),
            ],
            priority: "critical".to_string(),
            status: "approved".to_string(),
        },
        WireframeConcept {
            id: "collaboration-view".to_string(),
            name: "Collaboration Interface".to_string(),
            description: "Multi-user editing view with participant indicators".to_string(),
            elements: vec![
                "User avatars".to_string(),
                "Live cursors".to_string(),
                "Chat panel".to_string(),
                "Share controls".to_string(),
            ],
            priority: "medium".to_string(),
            status: "draft".to_string(),
        },
        WireframeConcept {
            id: "settings-panel".to_string(),
            name: "Settings and Preferences".to_string(),
            description: "Configuration interface for customizing the editor".to_string(),
            elements: vec![
                "Theme selector".to_string(),
                "Keyboard shortcuts".to_string(),
                "Plugin manager".to_string(),
                "Account settings".to_string(),
            ],
            priority: "low".to_string(),
            status: "concept".to_string(),
        },
    ]
});
