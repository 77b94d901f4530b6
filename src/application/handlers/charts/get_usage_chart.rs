//! GetUsageChartHandler - Query handler for the feature adoption chart.

use std::sync::Arc;

use super::get_revenue_chart::ChartData;
use crate::ports::ContentSource;

/// Handler for the per-feature adoption series.
pub struct GetUsageChartHandler {
    source: Arc<dyn ContentSource>,
}

impl GetUsageChartHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> ChartData {
        ChartData::from_points(self.source.feature_usage_points().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeedContentSource;
    use crate::domain::foundation::Percentage;

    #[tokio::test]
    async fn most_used_feature_sets_the_scale() {
        let handler = GetUsageChartHandler::new(Arc::new(SeedContentSource::new()));
        let chart = handler.handle().await;
        assert_eq!(chart.points.len(), 6);
        assert_eq!(chart.points[0].label, "Code Editor");
        assert_eq!(chart.widths[0], Percentage::HUNDRED);
    }
}
