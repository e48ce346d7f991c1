//! Logging macros for ergonomic log message formatting.
//!
//! Two call shapes are accepted:
//!
//! - `info!(logger, "format {}", args...)` formats the message, no fields
//! - `info!(logger, "message"; "key" => value, ...)` attaches fields
//!
//! # Examples
//!
//! ```
//! use syslog_logstash_logger::prelude::*;
//! use syslog_logstash_logger::info;
//!
//! let logger = Logger::discard_all();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! info!(logger, "Request served"; "user_id" => 12345, "path" => "/health");
//! ```

/// Log a message at an explicit level.
///
/// The message and fields are only evaluated when the level passes the
/// logger's threshold.
///
/// # Examples
///
/// ```
/// # use syslog_logstash_logger::prelude::*;
/// # let logger = Logger::discard_all();
/// use syslog_logstash_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Info, "Status code: {}", 200);
/// log!(logger, Level::Debug, "Cache miss"; "key" => "user:42");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr; $($key:expr => $value:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.log(level, $msg, [$($crate::Field::new($key, $value)),+]);
        } else {
            logger.metrics().record_filtered();
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.log(level, format!($($arg)+), ::std::iter::empty::<$crate::Field>());
        } else {
            logger.metrics().record_filtered();
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use syslog_logstash_logger::prelude::*;
/// # let logger = Logger::discard_all();
/// use syslog_logstash_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// debug!(logger, "Query executed"; "rows" => 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use syslog_logstash_logger::prelude::*;
/// # let logger = Logger::discard_all();
/// use syslog_logstash_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// info!(logger, "Running..."; "newField1" => "value1", "newField2" => 2);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}
