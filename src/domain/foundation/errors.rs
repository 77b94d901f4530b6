//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
///
/// The rendering pipeline itself is total and never returns these; they
/// exist for the one seam (section id parsing) where a caller-supplied
/// value can be rejected outright.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Unknown section id: {id}")]
    UnknownSection { id: String },
}

impl ValidationError {
    /// Creates an unknown section error.
    pub fn unknown_section(id: impl Into<String>) -> Self {
        ValidationError::UnknownSection { id: id.into() }
    }
}
