//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an entry. Lower ordinal means more verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Info required while troubleshooting issues
    Debug = 1,
    /// Info required for future post-mortems
    #[default]
    Info = 2,
}

/// Level used when the configuration does not name one.
pub const DEFAULT_LEVEL: Level = Level::Info;

impl Level {
    pub const ALL: [Level; 2] = [Level::Debug, Level::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
        }
    }

    /// Whether an entry at this level passes the given threshold
    #[inline]
    pub fn is_enabled_for(&self, threshold: Level) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Exact, case-sensitive match; no trimming.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LoggerError;

    fn try_from(ordinal: u8) -> Result<Self> {
        match ordinal {
            1 => Ok(Level::Debug),
            2 => Ok(Level::Info),
            other => Err(LoggerError::invalid_level(other.to_string())),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level as u8
    }
}
