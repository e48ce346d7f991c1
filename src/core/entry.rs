//! Log entry structure

use super::field::Field;
use super::level::Level;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of one log event.
///
/// Built by the logger for every accepted call and handed to exactly one
/// marshaller; nothing retains it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub message: String,
    pub fields: Vec<Field>,
    pub level: Level,
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Capture a new entry stamped with the current wall-clock time
    pub fn new(level: Level, message: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            message: message.into(),
            fields,
            level,
            timestamp: Utc::now(),
        }
    }

    /// Replace the captured time, for fixed clocks
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Timestamp rendered as RFC 3339 with second resolution, e.g. `2023-01-02T15:04:05Z`
    pub fn rfc3339_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
