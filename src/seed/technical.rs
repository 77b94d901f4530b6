//! Technical requirement seed data, flattened from category groupings.

use once_cell::sync::Lazy;

use crate::domain::prd::TechnicalRequirement;

fn requirement(
    id: &str,
    category: &str,
    name: &str,
    description: &str,
    priority: &str,
    status: &str,
) -> TechnicalRequirement {
    TechnicalRequirement {
        id: id.to_string(),
        category: category.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        priority: priority.to_string(),
        status: status.to_string(),
    }
}

pub static TECHNICAL_REQUIREMENTS: Lazy<Vec<TechnicalRequirement>> = Lazy::new(|| {
    vec![
        requirement(
            "platform-web",
            "Platform",
            "Web Application",
            "Browser-based application supporting modern web standards",
            "critical",
            "implemented",
        ),
        requirement(
            "platform-desktop",
            "Platform",
            "Desktop Application",
            "Native desktop app for Windows, macOS, and Linux",
            "high",
            "planned",
        ),
        requirement(
            "frontend-react",
            "Frontend",
            "React Framework",
            "Modern React with TypeScript for component-based architecture",
            "critical",
            "implemented",
        ),
        requirement(
            "frontend-monaco",
            "Frontend",
            "Monaco Editor",
            "VS Code editor engine for advanced text editing capabilities",
            "critical",
            "implemented",
        ),
        requirement(
            "backend-node",
            "Backend",
            "Node.js Runtime",
            "Server-side JavaScript runtime for API and real-time features",
            "critical",
            "implemented",
        ),
        requirement(
            "backend-websockets",
            "Backend",
            "WebSocket Support",
            "Real-time communication for collaborative features",
            "high",
            "in-progress",
        ),
        requirement(
            "perf-load-time",
            "Performance",
            "Fast Load Times",
            "Application loads in under 3 seconds on average connection",
            "high",
            "testing",
        ),
        requirement(
            "perf-large-files",
            "Performance",
            "Large File Support",
            "Handle files up to 100MB without performance degradation",
            "medium",
            "planned",
        ),
    ]
});
