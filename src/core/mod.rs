//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod failure;
pub mod field;
pub mod level;
pub mod log_info;
pub mod logger;
pub mod marshaller;
pub mod metrics;

pub use config::{Dsn, LoggerConfig, Publisher, DEFAULT_CHANNEL};
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use failure::{FailureReporter, StderrReporter};
pub use field::{Field, FieldValue};
pub use level::{Level, DEFAULT_LEVEL};
pub use log_info::{local_hostname, LogInfo};
pub use logger::{Logger, LoggerBuilder, Sink};
pub use marshaller::Marshaller;
pub use metrics::LoggerMetrics;
