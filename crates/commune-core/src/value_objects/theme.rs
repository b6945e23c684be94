//! Theme preference value object
//!
//! The UI theme used to be a process-global flag; here it is explicit
//! per-user state with a defined initial value and update operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stable string form used for storage and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a Theme from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeParseError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeParseError::Unknown(other.to_string())),
        }
    }
}
