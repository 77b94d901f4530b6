//! GetMetricsChartHandler - Query handler for the metric progress chart.

use std::sync::Arc;

use super::get_revenue_chart::ChartData;
use crate::ports::ContentSource;

/// Handler for the per-metric progress series, colored by trend.
pub struct GetMetricsChartHandler {
    source: Arc<dyn ContentSource>,
}

impl GetMetricsChartHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> ChartData {
        ChartData::from_points(self.source.metric_points().await)
    }
}
