//! Monetization seed data: pricing plans and revenue projections.

use once_cell::sync::Lazy;

use crate::domain::prd::{PricingPlan, RevenueProjection};

pub static PRICING_PLANS: Lazy<Vec<PricingPlan>> = Lazy::new(|| {
    vec![
        PricingPlan {
            id: "free".to_string(),
            name: "Community".to_string(),
            price: Some(0.0),
            period: "forever".to_string(),
            description: "Perfect for individual developers and open source projects"
                .to_string(),
            features: vec![
                "Core editor functionality".to_string(),
                "Basic syntax highlighting".to_string(),
                "Local file editing".to_string(),
                "Community support".to_string(),
            ],
            limitations: vec![
                "No cloud sync".to_string(),
                "Limited to 3 projects".to_string(),
                "No collaboration features".to_string(),
            ],
            popular: false,
        },
        PricingPlan {
            id: "pro".to_string(),
            name: "Professional".to_string(),
            price: Some(15.0),
            period: "month".to_string(),
            description: "Advanced features for professional developers".to_string(),
            features: vec![
                "All Community features".to_string(),
                "AI code completion".to_string(),
                "Cloud sync and backup".to_string(),
                "Unlimited projects".to_string(),
                "Advanced debugging tools".to_string(),
                "Priority support".to_string(),
            ],
            limitations: vec!["Limited to 5 collaborators".to_string()],
            popular: true,
        },
        PricingPlan {
            id: "team".to_string(),
            name: "Team".to_string(),
            price: Some(45.0),
            period: "month".to_string(),
            description: "Collaboration tools for development teams".to_string(),
            features: vec![
                "All Professional features".to_string(),
                "Real-time collaboration".to_string(),
                "Team workspaces".to_string(),
                "Advanced version control".to_string(),
                "Team analytics".to_string(),
                "Dedicated support".to_string(),
            ],
            limitations: Vec::new(),
            popular: false,
        },
        PricingPlan {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            price: None,
            period: "contact".to_string(),
            description: "Custom solutions for large organizations".to_string(),
            features: vec![
                "All Team features".to_string(),
                "On-premise deployment".to_string(),
                "SSO integration".to_string(),
                "Custom integrations".to_string(),
                "SLA guarantee".to_string(),
                "24/7 support".to_string(),
            ],
            limitations: Vec::new(),
            popular: false,
        },
    ]
});

fn projection(month: &str, revenue: f64) -> RevenueProjection {
    RevenueProjection {
        month: month.to_string(),
        revenue,
    }
}

pub static REVENUE_PROJECTIONS: Lazy<Vec<RevenueProjection>> = Lazy::new(|| {
    vec![
        projection("Jan", 800.0),
        projection("Feb", 1635.0),
        projection("Mar", 2640.0),
        projection("Apr", 4110.0),
        projection("May", 6025.0),
        projection("Jun", 8325.0),
        projection("Jul", 11160.0),
        projection("Aug", 14490.0),
        projection("Sep", 18210.0),
        projection("Oct", 22275.0),
        projection("Nov", 26925.0),
        projection("Dec", 32106.0),
    ]
});
