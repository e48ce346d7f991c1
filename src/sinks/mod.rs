//! Byte destinations for marshalled entries
//!
//! Any `std::io::Write + Send` can be a sink. These are the ones a DSN can select;
//! the discard sink is `std::io::Sink`.

pub mod stdout;
pub mod syslog;

pub use stdout::StdoutSink;
pub use syslog::{Facility, Priority, Severity, SyslogWriter, DEFAULT_FACILITY};
