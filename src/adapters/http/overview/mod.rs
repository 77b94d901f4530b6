//! Overview HTTP adapter: document facts and navigation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::overview_routes;
