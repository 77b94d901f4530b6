//! Sections HTTP adapter: listing and page composition.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::section_routes;
