//! Static explanatory prose for each section page.
//!
//! Titles, intro paragraphs, and supplementary panels. The page composer
//! wires these around each section's card grid in fixed order.

use crate::domain::content::SectionId;
use crate::domain::render::{PageText, ProseBlock};

/// Returns the fixed prose for a section.
pub fn page_text(section: SectionId) -> PageText {
    match section {
        SectionId::Introduction => PageText {
            title: "Introduction".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Purpose",
                vec![
                    "To create a modern, feature-rich coding application that enhances \
                     developer productivity and provides an intuitive development \
                     environment for programmers of all skill levels."
                        .to_string(),
                ],
            )),
            panels: vec![
                ProseBlock::paragraphs(
                    "Scope",
                    vec![
                        "A cross-platform desktop and web application supporting multiple \
                         programming languages with features including syntax highlighting, \
                         intelligent code completion, version control integration, \
                         collaborative editing, and extensible plugin architecture."
                            .to_string(),
                    ],
                ),
                ProseBlock::bullets(
                    "Market Analysis",
                    vec![
                        "Market size: $2.3B with 12.5% annual growth".to_string(),
                        "Competitors: VS Code, IntelliJ IDEA, Sublime Text, Atom".to_string(),
                        "Differentiators: AI-powered assistance, real-time collaboration, \
                         integrated learning resources"
                            .to_string(),
                    ],
                ),
            ],
        },
        SectionId::UserStories => PageText {
            title: "User Stories".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "User Scenarios",
                vec![
                    "Detailed scenarios describing how different personas interact with \
                     the application, each with explicit acceptance criteria."
                        .to_string(),
                ],
            )),
            panels: vec![ProseBlock::paragraphs(
                "Story Prioritization",
                vec![
                    "Stories are prioritized by user impact and implementation cost. \
                     High-priority stories block the initial launch; medium-priority \
                     stories follow in subsequent releases."
                        .to_string(),
                ],
            )],
        },
        SectionId::Features => PageText {
            title: "Features & Modules".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Feature Modules",
                vec![
                    "Core functionality is organized into independent modules, each with \
                     its own priority, complexity, and delivery status."
                        .to_string(),
                ],
            )),
            panels: vec![ProseBlock::paragraphs(
                "Module Dependencies",
                vec![
                    "Modules build on the core editor. Dependencies are listed per module \
                     and gate the order of delivery."
                        .to_string(),
                ],
            )],
        },
        SectionId::Technical => PageText {
            title: "Technical Requirements".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Technical Foundation",
                vec![
                    "Platform, frontend, backend, and performance requirements grouped by \
                     category, each tracked with priority and implementation status."
                        .to_string(),
                ],
            )),
            panels: vec![ProseBlock::bullets(
                "Architecture Decisions",
                vec![
                    "Browser-first delivery with a native desktop follow-up".to_string(),
                    "Monaco editor engine for text editing".to_string(),
                    "WebSocket infrastructure for real-time features".to_string(),
                ],
            )],
        },
        SectionId::UiUx => PageText {
            title: "UI/UX Design".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Design Approach",
                vec![
                    "Design principles guide every interface decision; wireframe concepts \
                     sketch the primary screens before high-fidelity design begins."
                        .to_string(),
                ],
            )),
            panels: vec![ProseBlock::bullets(
                "Design System",
                vec![
                    "Consistent component library across web and desktop".to_string(),
                    "Light and dark themes with high-contrast variants".to_string(),
                    "Responsive layouts from laptop to ultrawide".to_string(),
                ],
            )],
        },
        SectionId::Monetization => PageText {
            title: "Monetization Strategy".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Revenue Model Overview",
                vec![
                    "A freemium subscription model: a capable free tier drives adoption \
                     while professional and team tiers monetize advanced functionality."
                        .to_string(),
                ],
            )),
            panels: vec![
                ProseBlock::bullets(
                    "Primary Revenue Streams",
                    vec![
                        "Subscription revenue from Professional and Team tiers".to_string(),
                        "Enterprise licensing with on-premise deployment".to_string(),
                        "Marketplace commission on paid plugins".to_string(),
                    ],
                ),
                ProseBlock::bullets(
                    "Secondary Revenue Streams",
                    vec![
                        "Training and certification programs".to_string(),
                        "Professional services and onboarding".to_string(),
                        "Metered API access for integrations".to_string(),
                    ],
                ),
            ],
        },
        SectionId::Roadmap => PageText {
            title: "Future Enhancements & Roadmap".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Development Roadmap",
                vec![
                    "Our roadmap outlines the planned evolution of the application, \
                     focusing on delivering value through iterative development phases. \
                     Each phase builds upon previous functionality while introducing new \
                     capabilities."
                        .to_string(),
                ],
            )),
            panels: vec![
                ProseBlock::bullets(
                    "Long-term Vision",
                    vec![
                        "AI-powered code suggestions and debugging".to_string(),
                        "Advanced collaboration features".to_string(),
                        "Integration with popular development tools".to_string(),
                        "Support for emerging programming languages".to_string(),
                    ],
                ),
                ProseBlock::paragraphs(
                    "Release Strategy",
                    vec![
                        "We follow an agile methodology with 2-week sprints, allowing \
                         rapid iteration and continuous user feedback integration."
                            .to_string(),
                        "Each major feature undergoes extensive beta testing with select \
                         user groups before general release."
                            .to_string(),
                        "Minor updates deploy continuously; major features follow \
                         scheduled monthly releases."
                            .to_string(),
                    ],
                ),
            ],
        },
        SectionId::Metrics => PageText {
            title: "Success Metrics".to_string(),
            intro: Some(ProseBlock::paragraphs(
                "Measuring Success",
                vec![
                    "Key performance indicators across growth, engagement, revenue, \
                     quality, and technical health, each with an explicit target and \
                     measurement method."
                        .to_string(),
                ],
            )),
            panels: vec![ProseBlock::paragraphs(
                "Review Cadence",
                vec![
                    "Metrics are reviewed monthly against targets; trends feed directly \
                     into roadmap prioritization."
                        .to_string(),
                ],
            )],
        },
    }
}
