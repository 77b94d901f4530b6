//! GetRetentionChartHandler - Query handler for the cohort retention chart.

use std::sync::Arc;

use super::get_revenue_chart::ChartData;
use crate::ports::ContentSource;

/// Handler for the retention-by-period series.
pub struct GetRetentionChartHandler {
    source: Arc<dyn ContentSource>,
}

impl GetRetentionChartHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> ChartData {
        ChartData::from_points(self.source.retention_points().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeedContentSource;
    use crate::domain::foundation::Percentage;

    #[tokio::test]
    async fn retention_declines_from_the_first_week() {
        let handler = GetRetentionChartHandler::new(Arc::new(SeedContentSource::new()));
        let chart = handler.handle().await;
        assert_eq!(chart.points.len(), 6);
        // Week 1 is the cohort peak, later periods shrink.
        assert_eq!(chart.widths[0], Percentage::HUNDRED);
        for pair in chart.points.windows(2) {
            assert!(pair[1].value <= pair[0].value);
        }
    }
}
