//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown level name or ordinal
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Configuration string is not a parsable URL
    #[error("Invalid logger DSN '{dsn}': {source}")]
    InvalidDsn {
        dsn: String,
        #[source]
        source: url::ParseError,
    },

    /// DSN scheme does not name a known publisher
    #[error("Invalid logger publisher type: '{scheme}'")]
    InvalidPublisherType { scheme: String },

    /// Underlying transport could not be opened
    #[error("Failed to construct {sink} sink: {source}")]
    SinkConstruction {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Marshaller failed to serialize an entry
    #[error("Encoding error ({format}): {source}")]
    Encoding {
        format: String,
        #[source]
        source: serde_json::Error,
    },

    /// Sink rejected a write
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid DSN error
    pub fn invalid_dsn(dsn: impl Into<String>, source: url::ParseError) -> Self {
        LoggerError::InvalidDsn {
            dsn: dsn.into(),
            source,
        }
    }

    /// Create an invalid publisher type error
    pub fn invalid_publisher(scheme: impl Into<String>) -> Self {
        LoggerError::InvalidPublisherType {
            scheme: scheme.into(),
        }
    }

    /// Create a sink construction error
    pub fn sink_construction(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkConstruction {
            sink: sink.into(),
            source,
        }
    }

    /// Create an encoding error for the given output format
    pub fn encoding(format: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::Encoding {
            format: format.into(),
            source,
        }
    }

    /// Whether this error can only happen while building a logger
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel { .. }
                | LoggerError::InvalidDsn { .. }
                | LoggerError::InvalidPublisherType { .. }
                | LoggerError::SinkConstruction { .. }
        )
    }
}
