//! # Syslog Logstash Logger
//!
//! A leveled, structured logging facade. Each call carries a message and
//! key/value fields; the logger filters it against a threshold, marshals it
//! into one output format and writes it to one sink.
//!
//! ## Formats
//!
//! - **Human**: one readable line per entry
//! - **JSON**: the entry's own structure
//! - **Logstash**: flat JSON with logstash metadata, optionally framed with
//!   `@cee: ` for rsyslog
//!
//! ## Configuration
//!
//! ```
//! use syslog_logstash_logger::{Field, Logger};
//!
//! let logger = Logger::from_dsn("discardall://?level=debug", "app", "test")?;
//! logger.info("Running...", [Field::new("newField1", "value1")]);
//! # Ok::<(), syslog_logstash_logger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod marshallers;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Dsn, Entry, FailureReporter, Field, FieldValue, Level, LogInfo, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Marshaller, Publisher, Result, StderrReporter,
    };
    pub use crate::marshallers::{
        DiscardMarshaller, HumanMarshaller, JsonMarshaller, LogstashMarshaller,
        SyslogLogstashMarshaller,
    };
    pub use crate::sinks::{Facility, Priority, Severity, StdoutSink, SyslogWriter};
}

pub use core::{
    Dsn, Entry, FailureReporter, Field, FieldValue, Level, LogInfo, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Marshaller, Publisher, Result, StderrReporter,
    DEFAULT_CHANNEL, DEFAULT_LEVEL,
};
pub use marshallers::{
    DiscardMarshaller, HumanMarshaller, JsonMarshaller, LogstashMarshaller,
    SyslogLogstashMarshaller,
};
pub use sinks::{Facility, Priority, Severity, StdoutSink, SyslogWriter, DEFAULT_FACILITY};
