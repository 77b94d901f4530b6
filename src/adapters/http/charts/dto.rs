//! HTTP DTOs for the chart endpoints.
//!
//! Charts go out display-ready: each bar carries its formatted value, its
//! trend color, and the derived relative width.

use serde::Serialize;

use crate::application::handlers::ChartData;
use crate::domain::content::Trend;
use crate::domain::format::{format_currency, format_percentage};
use crate::domain::foundation::{ColorToken, Percentage};

/// Response for a bar chart series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub title: String,
    pub bars: Vec<ChartBarView>,
}

impl ChartResponse {
    /// Revenue series: values formatted as US dollars.
    pub fn revenue(data: ChartData) -> Self {
        Self::build("Monthly Revenue Projections", data, |value| {
            format_currency(value, "USD")
        })
    }

    /// Metric series: values formatted as percentages of target.
    pub fn metrics(data: ChartData) -> Self {
        Self::build("Progress Toward Targets", data, |value| {
            format_percentage(value, 1)
        })
    }

    /// Feature adoption series: share of users per feature.
    pub fn usage(data: ChartData) -> Self {
        Self::build("Feature Usage", data, |value| format_percentage(value, 0))
    }

    /// Cohort retention series: share still active per period.
    pub fn retention(data: ChartData) -> Self {
        Self::build("User Retention", data, |value| format_percentage(value, 0))
    }

    fn build(title: &str, data: ChartData, display: impl Fn(f64) -> String) -> Self {
        let bars = data
            .points
            .into_iter()
            .zip(data.widths)
            .map(|(point, width)| ChartBarView {
                label: point.label,
                value: point.value,
                display: display(point.value),
                trend: point.trend,
                color: point.trend.color(),
                width,
            })
            .collect();
        Self {
            title: title.to_string(),
            bars,
        }
    }
}

/// One display-ready chart bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBarView {
    pub label: String,
    pub value: f64,
    /// Formatted value, currency or percentage depending on the series.
    pub display: String,
    pub trend: Trend,
    pub color: ColorToken,
    pub width: Percentage,
}
