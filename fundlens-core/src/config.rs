//! Dashboard configuration — TOML-backed, every field defaulted.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "coinme_competitive_intelligence.csv";

/// Default keyword for the focus-segment rollup.
pub const DEFAULT_FOCUS_KEYWORD: &str = "Bitcoin";

/// Default quadrant divider on both matrix axes.
pub const DEFAULT_QUADRANT_DIVIDER: f64 = 2.5;

/// Default "recent funding" cutoff (inclusive).
pub fn default_recent_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 1).unwrap_or_default()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Constants that shape the summary metrics, matrix and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Events dated on or after this day count as recent.
    pub recent_cutoff: NaiveDate,
    /// Segments containing this keyword (case-insensitive) form the focus rollup.
    pub focus_keyword: String,
    pub quadrant_divider: f64,
    pub export_file_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_cutoff: default_recent_cutoff(),
            focus_keyword: DEFAULT_FOCUS_KEYWORD.to_string(),
            quadrant_divider: DEFAULT_QUADRANT_DIVIDER,
            export_file_name: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
