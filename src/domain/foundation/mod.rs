//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the rendering pipeline: percentages for bar widths and progress,
//! color tokens for badges, and the validation error for section id
//! parsing.

mod color;
mod errors;
mod percentage;

pub use color::ColorToken;
pub use errors::ValidationError;
pub use percentage::Percentage;
