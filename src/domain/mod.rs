//! Domain layer - the pure content-rendering pipeline.
//!
//! Data flows one direction: typed PRD entities project into partial
//! records, normalization makes them total, derived attributes (colors,
//! bar widths, formatted values) are computed into new values, and the
//! render module assembles cards, layouts, and pages. Nothing here mutates
//! its input or performs I/O.

pub mod content;
pub mod format;
pub mod foundation;
pub mod prd;
pub mod render;
