//! Adapters - concrete implementations of the ports.

pub mod http;
pub mod seed_source;

pub use seed_source::SeedContentSource;
