//! Application layer - query handlers wiring ports to the domain pipeline.

pub mod handlers;
