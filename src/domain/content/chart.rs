//! Chart points and relative bar widths.

use serde::Serialize;

use super::badge::Trend;
use crate::domain::foundation::Percentage;

/// One labeled value in a chart series.
///
/// Construction sanitizes the value: non-finite numbers become zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub trend: Trend,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64, trend: Trend) -> Self {
        Self {
            label: label.into(),
            value: if value.is_finite() { value } else { 0.0 },
            trend,
        }
    }
}

/// Scales a series to relative bar widths in [0, 100].
///
/// Each width is `value / max(series) * 100`, clamped. If the series is
/// empty or its maximum is not positive, every width is zero; division by
/// zero cannot occur. Non-finite inputs are treated as zero.
pub fn bar_widths(series: &[f64]) -> Vec<Percentage> {
    let sanitized: Vec<f64> = series
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();
    let max = sanitized.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![Percentage::ZERO; sanitized.len()];
    }
    sanitized
        .iter()
        .map(|v| Percentage::new(v / max * 100.0))
        .collect()
}
