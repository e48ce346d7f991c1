//! Fallback channel for per-call logging failures
//!
//! Marshal and write errors never reach the caller of a logging method. They
//! are handed to a [`FailureReporter`] instead, which must not write through
//! the logger that failed.

use super::error::LoggerError;

pub trait FailureReporter: Send + Sync {
    fn report(&self, error: &LoggerError);
}

/// Reports failures on standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl FailureReporter for StderrReporter {
    fn report(&self, error: &LoggerError) {
        eprintln!("[LOGGER ERROR] {}", error);
    }
}

impl<F> FailureReporter for F
where
    F: Fn(&LoggerError) + Send + Sync,
{
    fn report(&self, error: &LoggerError) {
        self(error)
    }
}
