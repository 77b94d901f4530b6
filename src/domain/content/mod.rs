//! Content module - Records, badges, sections, and charts.
//!
//! The vocabulary of the rendering pipeline: sources supply
//! [`PartialContentRecord`]s, [`normalize`] makes them total, and badges
//! and chart points carry the enumerated levels that drive display colors.

mod badge;
mod chart;
mod record;
mod section;

pub use badge::{Badge, BadgeKind, Complexity, PartialBadge, Priority, Status, Trend};
pub use chart::{bar_widths, ChartPoint};
pub use record::{normalize, BulletGroup, ContentRecord, MetaField, PartialContentRecord};
pub use section::SectionId;
