//! Percentage value object (0-100 scale).

use serde::Serialize;
use std::fmt;

/// A finite value between 0.0 and 100.0 inclusive.
///
/// Construction sanitizes its input: non-finite numbers become zero and
/// everything else is clamped into range. Downstream code can therefore
/// treat any `Percentage` as safe to display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentage, clamping to the valid range.
    ///
    /// `NaN` and infinities are normalized to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Formats with a fixed number of decimal places, e.g. `"71.4%"`.
    pub fn format(&self, decimals: usize) -> String {
        format!("{:.*}%", decimals, self.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
