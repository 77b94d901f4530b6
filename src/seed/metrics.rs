//! Success metric seed data.

use once_cell::sync::Lazy;

use crate::domain::prd::{FeatureUsage, RetentionPoint, SuccessMetric};

fn metric(
    id: &str,
    name: &str,
    description: &str,
    target: &str,
    current: &str,
    progress: f64,
    trend: &str,
    category: &str,
) -> SuccessMetric {
    SuccessMetric {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        target: target.to_string(),
        current: current.to_string(),
        progress,
        trend: trend.to_string(),
        category: category.to_string(),
    }
}

pub static SUCCESS_METRICS: Lazy<Vec<SuccessMetric>> = Lazy::new(|| {
    vec![
        metric(
            "user-growth",
            "User Growth",
            "Monthly active users and user acquisition rate",
            "10,000 MAU by Q4 2024",
            "2,500 MAU",
            25.0,
            "up",
            "Growth",
        ),
        metric(
            "retention",
            "User Retention",
            "30-day user retention rate",
            "70%",
            "45%",
            64.0,
            "up",
            "Engagement",
        ),
        metric(
            "revenue",
            "Monthly Recurring Revenue",
            "Subscription revenue growth",
            "$50,000 MRR by Q4 2024",
            "$8,500 MRR",
            17.0,
            "up",
            "Revenue",
        ),
        metric(
            "satisfaction",
            "User Satisfaction",
            "Net Promoter Score (NPS)",
            "NPS > 50",
            "NPS 32",
            64.0,
            "stable",
            "Quality",
        ),
        metric(
            "performance",
            "App Performance",
            "Average page load time",
            "< 2 seconds",
            "2.8 seconds",
            71.0,
            "down",
            "Technical",
        ),
    ]
});

fn usage(feature: &str, usage: f64) -> FeatureUsage {
    FeatureUsage {
        feature: feature.to_string(),
        usage,
    }
}

pub static FEATURE_USAGE: Lazy<Vec<FeatureUsage>> = Lazy::new(|| {
    vec![
        usage("Code Editor", 95.0),
        usage("Syntax Highlighting", 88.0),
        usage("File Explorer", 76.0),
        usage("Git Integration", 54.0),
        usage("AI Completion", 42.0),
        usage("Collaboration", 18.0),
    ]
});

fn retention(period: &str, rate: f64) -> RetentionPoint {
    RetentionPoint {
        period: period.to_string(),
        rate,
    }
}

pub static RETENTION: Lazy<Vec<RetentionPoint>> = Lazy::new(|| {
    vec![
        retention("Week 1", 85.0),
        retention("Week 2", 65.0),
        retention("Week 3", 52.0),
        retention("Week 4", 45.0),
        retention("Month 2", 38.0),
        retention("Month 3", 32.0),
    ]
});
