//! Enumerated badge levels and their color lookup.
//!
//! Priority, status, complexity, and trend arrive in seed data as loose
//! strings. Each closed enum parses arbitrary text with a default arm, so
//! color lookup downstream is total: an unrecognized level resolves to the
//! kind's default level rather than failing.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ColorToken;

/// Priority level of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parses loose text; unknown values fall back to `Medium`.
    ///
    /// "critical" is an alias for `High` kept from legacy seed data.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "critical" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Priority::High => ColorToken::Red,
            Priority::Medium => ColorToken::Yellow,
            Priority::Low => ColorToken::Green,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Status {
    /// Parses loose text; unknown values fall back to `Planned`.
    ///
    /// Seed data uses several synonyms ("implemented", "approved",
    /// "testing", "draft", "concept") which collapse onto the three
    /// canonical levels.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "completed" | "complete" | "implemented" | "approved" | "done" => Status::Completed,
            "in-progress" | "in progress" | "testing" => Status::InProgress,
            _ => Status::Planned,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
            Status::Planned => "planned",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Status::Completed => ColorToken::Green,
            Status::InProgress => ColorToken::Blue,
            Status::Planned => ColorToken::Gray,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Planned
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Implementation complexity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Parses loose text; unknown values fall back to `Medium`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Complexity::High,
            "low" => Complexity::Low,
            _ => Complexity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Complexity::High => ColorToken::Red,
            Complexity::Medium => ColorToken::Yellow,
            Complexity::Low => ColorToken::Green,
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Complexity::Medium
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction a metric is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Parses loose text; unknown values fall back to `Stable`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Trend::Up => ColorToken::Green,
            Trend::Down => ColorToken::Red,
            Trend::Stable => ColorToken::Gray,
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Stable
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which enumeration a badge's level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Priority,
    Status,
    Complexity,
    /// Free-text badge (category, quarter). Always neutral gray.
    Plain,
}

impl BadgeKind {
    /// Default level label used when a badge arrives without one.
    pub fn default_label(&self) -> &'static str {
        match self {
            BadgeKind::Priority => Priority::default().as_str(),
            BadgeKind::Status => Status::default().as_str(),
            BadgeKind::Complexity => Complexity::default().as_str(),
            BadgeKind::Plain => "",
        }
    }
}

/// A badge as supplied by a content source: the level text may be absent
/// or unrecognized. [`Badge::resolve`] turns it into a display badge.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialBadge {
    pub kind: BadgeKind,
    pub level: Option<String>,
}

impl PartialBadge {
    pub fn priority(level: impl Into<String>) -> Self {
        Self {
            kind: BadgeKind::Priority,
            level: Some(level.into()),
        }
    }

    pub fn status(level: impl Into<String>) -> Self {
        Self {
            kind: BadgeKind::Status,
            level: Some(level.into()),
        }
    }

    pub fn complexity(level: impl Into<String>) -> Self {
        Self {
            kind: BadgeKind::Complexity,
            level: Some(level.into()),
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            kind: BadgeKind::Plain,
            level: Some(label.into()),
        }
    }
}

/// A fully resolved display badge: canonical label plus color token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
    pub color: ColorToken,
}

impl Badge {
    /// Resolves a partial badge into a display badge.
    ///
    /// Enumerated kinds parse their level (absent level uses the kind's
    /// default) and take the canonical label and color from the enum.
    /// Plain badges keep their text and render neutral gray.
    pub fn resolve(partial: &PartialBadge) -> Self {
        let raw = partial.level.as_deref().unwrap_or("");
        match partial.kind {
            BadgeKind::Priority => {
                let level = if raw.is_empty() {
                    Priority::default()
                } else {
                    Priority::parse(raw)
                };
                Self {
                    kind: BadgeKind::Priority,
                    label: level.as_str().to_string(),
                    color: level.color(),
                }
            }
            BadgeKind::Status => {
                let level = if raw.is_empty() {
                    Status::default()
                } else {
                    Status::parse(raw)
                };
                Self {
                    kind: BadgeKind::Status,
                    label: level.as_str().to_string(),
                    color: level.color(),
                }
            }
            BadgeKind::Complexity => {
                let level = if raw.is_empty() {
                    Complexity::default()
                } else {
                    Complexity::parse(raw)
                };
                Self {
                    kind: BadgeKind::Complexity,
                    label: level.as_str().to_string(),
                    color: level.color(),
                }
            }
            BadgeKind::Plain => Self {
                kind: BadgeKind::Plain,
                label: raw.to_string(),
                color: ColorToken::Gray,
            },
        }
    }
}
