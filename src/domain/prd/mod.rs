//! PRD module - Canonical typed entities for every document section.
//!
//! Each entity knows how to project itself into a [`PartialContentRecord`]
//! so the one rendering pipeline serves every section. The entities keep
//! loose strings for enumerated fields on purpose: canonicalization is the
//! normalizer's job, not the data's.
//!
//! [`PartialContentRecord`]: crate::domain::content::PartialContentRecord

mod design;
mod feature;
mod introduction;
mod metrics;
mod overview;
mod pricing;
mod roadmap;
mod technical;
mod user_story;

pub use design::{DesignPrinciple, WireframeConcept};
pub use feature::FeatureModule;
pub use introduction::AudienceSegment;
pub use metrics::{FeatureUsage, RetentionPoint, SuccessMetric};
pub use overview::{AppOverview, NavigationItem, SectionSummary};
pub use pricing::{PricingPlan, RevenueProjection};
pub use roadmap::{Milestone, RoadmapItem};
pub use technical::TechnicalRequirement;
pub use user_story::UserStory;
