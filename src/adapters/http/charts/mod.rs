//! Charts HTTP adapter: display-ready bar chart series.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::chart_routes;
