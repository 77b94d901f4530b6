//! GetRevenueChartHandler - Query handler for the revenue projection chart.

use std::sync::Arc;

use crate::domain::content::{bar_widths, ChartPoint};
use crate::domain::foundation::Percentage;
use crate::ports::ContentSource;

/// A chart series with bar widths already derived from the values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
    pub widths: Vec<Percentage>,
}

impl ChartData {
    /// Derives relative bar widths for a point series.
    pub fn from_points(points: Vec<ChartPoint>) -> Self {
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let widths = bar_widths(&values);
        Self { points, widths }
    }
}

/// Handler for the monthly revenue projection series.
pub struct GetRevenueChartHandler {
    source: Arc<dyn ContentSource>,
}

impl GetRevenueChartHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> ChartData {
        ChartData::from_points(self.source.revenue_points().await)
    }
}
