//! Feature module seed data.

use once_cell::sync::Lazy;

use crate::domain::prd::FeatureModule;

pub static FEATURE_MODULES: Lazy<Vec<FeatureModule>> = Lazy::new(|| {
    vec![
        FeatureModule {
            id: "editor-core".to_string(),
            name: "Core Editor".to_string(),
            description: "Basic text editing functionality with syntax highlighting"
                .to_string(),
            priority: "critical".to_string(),
            status: "completed".to_string(),
            complexity: "medium".to_string(),
            progress: 100.0,
            features: vec![
                "Multi-language syntax highlighting".to_string(),
                "Code folding and indentation".to_string(),
                "Find and replace functionality".to_string(),
                "Multiple tabs and split views".to_string(),
            ],
            dependencies: Vec::new(),
            estimated_effort: "3 months".to_string(),
            team: "Frontend Team".to_string(),
        },
        FeatureModule {
            id: "ai-assistant".to_string(),
            name: "AI Code Assistant".to_string(),
            description: "Intelligent code completion and suggestions powered by machine \
                          learning"
                .to_string(),
            priority: "high".to_string(),
            status: "in-progress".to_string(),
            complexity: "high".to_string(),
            progress: 70.0,
            features: vec![
                "Context-aware code completion".to_string(),
                "Code generation from comments".to_string(),
                "Bug detection and fixes".to_string(),
                "Code optimization suggestions".to_string(),
            ],
            dependencies: vec!["editor-core".to_string()],
            estimated_effort: "4 months".to_string(),
            team: "AI Team".to_string(),
        },
        FeatureModule {
            id: "collaboration".to_string(),
            name: "Real-time Collaboration".to_string(),
            description: "Multi-user editing and team collaboration features".to_string(),
            priority: "medium".to_string(),
            status: "planned".to_string(),
            complexity: "high".to_string(),
            progress: 0.0,
            features: vec![
                "Live collaborative editing".to_string(),
                "Voice and video chat integration".to_string(),
                "Shared workspaces".to_string(),
                "Comment and review system".to_string(),
            ],
            dependencies: vec!["editor-core".to_string(), "user-management".to_string()],
            estimated_effort: "5 months".to_string(),
            team: "Backend Team".to_string(),
        },
        FeatureModule {
            id: "version-control".to_string(),
            name: "Version Control".to_string(),
            description: "Integrated Git support and version management".to_string(),
            priority: "high".to_string(),
            status: "in-progress".to_string(),
            complexity: "medium".to_string(),
            progress: 45.0,
            features: vec![
                "Git integration".to_string(),
                "Visual diff viewer".to_string(),
                "Branch management".to_string(),
                "Merge conflict resolution".to_string(),
            ],
            dependencies: vec!["editor-core".to_string()],
            estimated_effort: "2 months".to_string(),
            team: "DevOps Team".to_string(),
        },
        FeatureModule {
            id: "debugging".to_string(),
            name: "Debugging Tools".to_string(),
            description: "Integrated debugging and testing capabilities".to_string(),
            priority: "high".to_string(),
            status: "planned".to_string(),
            complexity: "high".to_string(),
            progress: 0.0,
            features: vec![
                "Breakpoint debugging".to_string(),
                "Variable inspection".to_string(),
                "Call stack visualization".to_string(),
                "Performance profiling".to_string(),
            ],
            dependencies: vec!["editor-core".to_string(), "language-servers".to_string()],
            estimated_effort: "3 months".to_string(),
            team: "Tools Team".to_string(),
        },
    ]
});
