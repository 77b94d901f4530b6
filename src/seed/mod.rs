//! Seed module - Hardcoded PRD content.
//!
//! The single static data source the pipeline reads. Loaded once behind
//! `Lazy` statics and never mutated; the pipeline computes derived values
//! into new transient structures instead of writing back.

mod features;
mod introduction;
mod metrics;
mod monetization;
mod navigation;
mod overview;
mod prose;
mod roadmap;
mod technical;
mod ui_ux;
mod user_stories;

pub use features::FEATURE_MODULES;
pub use introduction::AUDIENCE_SEGMENTS;
pub use metrics::{FEATURE_USAGE, RETENTION, SUCCESS_METRICS};
pub use monetization::{PRICING_PLANS, REVENUE_PROJECTIONS};
pub use navigation::NAVIGATION;
pub use overview::{APP_OVERVIEW, SECTION_SUMMARIES};
pub use prose::page_text;
pub use roadmap::ROADMAP_ITEMS;
pub use technical::TECHNICAL_REQUIREMENTS;
pub use ui_ux::{DESIGN_PRINCIPLES, WIREFRAME_CONCEPTS};
pub use user_stories::USER_STORIES;
