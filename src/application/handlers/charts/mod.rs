//! Chart query handlers.

mod get_metrics_chart;
mod get_retention_chart;
mod get_revenue_chart;
mod get_usage_chart;

pub use get_metrics_chart::GetMetricsChartHandler;
pub use get_retention_chart::GetRetentionChartHandler;
pub use get_revenue_chart::{ChartData, GetRevenueChartHandler};
pub use get_usage_chart::GetUsageChartHandler;
