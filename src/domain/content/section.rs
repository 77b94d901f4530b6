//! Section identifiers.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Closed set of PRD sections.
///
/// Display order is significant and fixed by [`SectionId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Introduction,
    UserStories,
    Features,
    Technical,
    UiUx,
    Monetization,
    Roadmap,
    Metrics,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Introduction,
        SectionId::UserStories,
        SectionId::Features,
        SectionId::Technical,
        SectionId::UiUx,
        SectionId::Monetization,
        SectionId::Roadmap,
        SectionId::Metrics,
    ];

    /// Stable kebab-case id, used in URLs and as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Introduction => "introduction",
            SectionId::UserStories => "user-stories",
            SectionId::Features => "features",
            SectionId::Technical => "technical",
            SectionId::UiUx => "ui-ux",
            SectionId::Monetization => "monetization",
            SectionId::Roadmap => "roadmap",
            SectionId::Metrics => "metrics",
        }
    }

    /// Parses a section id from its kebab-case form.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "introduction" => Ok(SectionId::Introduction),
            "user-stories" => Ok(SectionId::UserStories),
            "features" => Ok(SectionId::Features),
            "technical" => Ok(SectionId::Technical),
            "ui-ux" => Ok(SectionId::UiUx),
            "monetization" => Ok(SectionId::Monetization),
            "roadmap" => Ok(SectionId::Roadmap),
            "metrics" => Ok(SectionId::Metrics),
            other => Err(ValidationError::unknown_section(other)),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
