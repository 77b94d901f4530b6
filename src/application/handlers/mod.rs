//! Application query handlers.
//!
//! Thin orchestration over the content source port: fetch, run the pure
//! pipeline, return a view. No handler holds state.

pub mod charts;
pub mod content;

pub use charts::{
    ChartData, GetMetricsChartHandler, GetRetentionChartHandler, GetRevenueChartHandler,
    GetUsageChartHandler,
};
pub use content::{
    GetNavigationHandler, GetOverviewHandler, GetSectionPageHandler, GetSectionPageQuery,
    ListSectionsHandler, OverviewData, SectionProgress,
};
