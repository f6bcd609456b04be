//! Deployment mode controlling how much failure detail reaches clients.

use std::fmt;
use std::str::FromStr;

/// Whether the service runs in production or development.
///
/// Only development exposes raw database diagnostics in error bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeMode {
    #[default]
    Production,
    Development,
}

impl RuntimeMode {
    #[must_use]
    pub const fn exposes_diagnostics(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse a configured mode, treating anything unrecognised as production.
    #[must_use]
    pub fn from_setting(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Development => "development",
        })
    }
}

/// Error returned when a mode string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown runtime mode: {0}")]
pub struct UnknownRuntimeMode(String);

impl FromStr for RuntimeMode {
    type Err = UnknownRuntimeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(UnknownRuntimeMode(other.to_owned())),
        }
    }
}
