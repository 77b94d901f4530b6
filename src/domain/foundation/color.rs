//! Color tokens used by badge and chart rendering.

use serde::Serialize;
use std::fmt;

/// Abstract display color resolved from an enumerated level.
///
/// The rendering pipeline never emits raw CSS or hex values; clients map
/// these tokens onto their own theme. `Gray` is the neutral fallback every
/// lookup degrades to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Yellow,
    Green,
    Blue,
    Gray,
}

impl ColorToken {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Yellow => "yellow",
            ColorToken::Green => "green",
            ColorToken::Blue => "blue",
            ColorToken::Gray => "gray",
        }
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        ColorToken::Gray
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
