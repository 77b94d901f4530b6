//! Success metric entities.

use serde::Serialize;

use crate::domain::content::{ChartPoint, MetaField, PartialBadge, PartialContentRecord, Trend};

/// One success metric with target and current measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMetric {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target: String,
    pub current: String,
    /// Progress toward target, 0-100.
    pub progress: f64,
    /// Loose trend text; canonicalized via [`Trend::parse`].
    pub trend: String,
    pub category: String,
}

impl SuccessMetric {
    pub fn trend_direction(&self) -> Trend {
        Trend::parse(&self.trend)
    }

    /// Chart point for the metrics bar chart: progress toward target,
    /// colored by trend direction.
    pub fn point(&self) -> ChartPoint {
        ChartPoint::new(&self.name, self.progress, self.trend_direction())
    }

    pub fn record(&self) -> PartialContentRecord {
        PartialContentRecord {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            badges: Some(vec![PartialBadge::plain(&self.category)]),
            metadata: Some(vec![
                MetaField::new("Target", &self.target),
                MetaField::new("Current", &self.current),
                MetaField::new("Trend", self.trend_direction().as_str()),
            ]),
            children: None,
        }
    }
}

/// Adoption of one product feature, as a share of active users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureUsage {
    pub feature: String,
    /// Share of users exercising the feature, 0-100.
    pub usage: f64,
}

impl FeatureUsage {
    /// Chart point for the feature usage series. Usage is a snapshot, so
    /// the point carries no direction.
    pub fn point(&self) -> ChartPoint {
        ChartPoint::new(&self.feature, self.usage, Trend::Stable)
    }
}

/// Retention rate at one point after signup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPoint {
    pub period: String,
    /// Share of the cohort still active, 0-100.
    pub rate: f64,
}

impl RetentionPoint {
    pub fn point(&self) -> ChartPoint {
        ChartPoint::new(&self.period, self.rate, Trend::Stable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::normalize;

    fn metric(trend: &str) -> SuccessMetric {
        SuccessMetric {
            id: "retention".to_string(),
            name: "User Retention".to_string(),
            description: "30-day user retention rate.".to_string(),
            target: "70%".to_string(),
            current: "45%".to_string(),
            progress: 64.0,
            trend: trend.to_string(),
            category: "Engagement".to_string(),
        }
    }

    #[test]
    fn unknown_trend_canonicalizes_to_stable() {
        assert_eq!(metric("sideways").trend_direction(), Trend::Stable);
        let record = normalize(metric("sideways").record());
        assert_eq!(record.metadata[2].value, "stable");
    }

    #[test]
    fn point_carries_progress_and_trend() {
        let point = metric("up").point();
        assert_eq!(point.label, "User Retention");
        assert_eq!(point.value, 64.0);
        assert_eq!(point.trend, Trend::Up);
    }

    #[test]
    fn usage_point_is_a_neutral_snapshot() {
        let usage = FeatureUsage {
            feature: "Code Editor".to_string(),
            usage: 95.0,
        };
        let point = usage.point();
        assert_eq!(point.label, "Code Editor");
        assert_eq!(point.value, 95.0);
        assert_eq!(point.trend, Trend::Stable);
    }

    #[test]
    fn retention_point_keeps_period_label() {
        let retention = RetentionPoint {
            period: "Week 4".to_string(),
            rate: 45.0,
        };
        let point = retention.point();
        assert_eq!(point.label, "Week 4");
        assert_eq!(point.value, 45.0);
    }
}
