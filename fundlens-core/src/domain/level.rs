//! Three-step ordinal rating used for relevance and competitive threat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Low / Medium / High judgment.
///
/// Ordering follows the ordinal score, so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Ordinal score used on the threat/relevance matrix axes.
    pub fn score(self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a string is not one of the three level names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level {0:?} (expected Low, Medium or High)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" | "low" | "LOW" => Ok(Level::Low),
            "Medium" | "medium" | "MEDIUM" => Ok(Level::Medium),
            "High" | "high" | "HIGH" => Ok(Level::High),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
