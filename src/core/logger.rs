//! Main logger implementation

use super::{
    entry::Entry,
    error::LoggerError,
    failure::{FailureReporter, StderrReporter},
    field::Field,
    level::{Level, DEFAULT_LEVEL},
    log_info::LogInfo,
    marshaller::Marshaller,
    metrics::LoggerMetrics,
};
use crate::marshallers::{DiscardMarshaller, HumanMarshaller, SyslogLogstashMarshaller};
use crate::sinks::{Facility, Priority, Severity, StdoutSink, SyslogWriter};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Byte destination shared by every logging call
pub type Sink = Box<dyn Write + Send>;

/// Leveled, structured logger.
///
/// Calls below the threshold return before an entry is built. Accepted calls
/// are marshalled and written synchronously; failures go to the
/// [`FailureReporter`] and never to the caller.
pub struct Logger {
    marshaller: Box<dyn Marshaller>,
    sink: Mutex<Sink>,
    threshold: Level,
    reporter: Arc<dyn FailureReporter>,
    metrics: LoggerMetrics,
}

impl Logger {
    pub fn new<M, W>(marshaller: M, sink: W, threshold: Level) -> Self
    where
        M: Marshaller + 'static,
        W: Write + Send + 'static,
    {
        Self::builder()
            .marshaller(marshaller)
            .sink(sink)
            .threshold(threshold)
            .build()
    }

    /// Human-readable lines on standard output
    pub fn stdout(info: LogInfo, threshold: Level) -> Self {
        Self::new(HumanMarshaller::new(info), StdoutSink::new(), threshold)
    }

    /// Logstash JSON framed for rsyslog, sent to the local syslog daemon
    pub fn syslog_to_logstash(
        info: LogInfo,
        threshold: Level,
        facility: Facility,
    ) -> super::error::Result<Self> {
        let priority = Priority::new(facility, Severity::from(threshold));
        let writer = SyslogWriter::local(priority, info.tag())
            .map_err(|e| LoggerError::sink_construction("syslog", e))?;

        Ok(Self::new(SyslogLogstashMarshaller::new(info), writer, threshold))
    }

    /// Logstash JSON framed for rsyslog, sent over UDP to a remote collector
    pub fn syslog_to_logstash_udp(
        info: LogInfo,
        threshold: Level,
        facility: Facility,
        address: &str,
    ) -> super::error::Result<Self> {
        let priority = Priority::new(facility, Severity::from(threshold));
        let writer = SyslogWriter::udp(address, priority, info.tag(), info.hostname.clone())
            .map_err(|e| LoggerError::sink_construction("syslog", e))?;

        Ok(Self::new(SyslogLogstashMarshaller::new(info), writer, threshold))
    }

    /// Accepts everything and writes nothing
    pub fn discard_all() -> Self {
        Self::new(DiscardMarshaller::new(), io::sink(), DEFAULT_LEVEL)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn marshaller_name(&self) -> &str {
        self.marshaller.name()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_for(self.threshold)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Debug, message, fields);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Info, message, fields);
    }

    pub fn log(
        &self,
        level: Level,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field>,
    ) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = Entry::new(level, message, fields.into_iter().collect());
        self.dispatch(&entry);
    }

    /// Marshal then write; a marshal failure skips the write
    fn dispatch(&self, entry: &Entry) {
        let data = match self.marshaller.marshal(entry) {
            Ok(data) => data,
            Err(e) => {
                self.metrics.record_marshal_failure();
                self.reporter.report(&e);
                return;
            }
        };

        let written = {
            let mut sink = self.sink.lock();
            sink.write_all(&data)
        };

        match written {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                self.reporter.report(&LoggerError::Write(e));
            }
        }
    }

    pub fn flush(&self) -> super::error::Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard_all()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("marshaller", &self.marshaller.name())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use syslog_logstash_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(Level::Debug)
///     .marshaller(HumanMarshaller::new(LogInfo::new("chan", "app", "dev", "host")))
///     .sink(Vec::<u8>::new())
///     .build();
///
/// logger.debug("ready", [Field::new("port", 8080)]);
/// ```
pub struct LoggerBuilder {
    marshaller: Box<dyn Marshaller>,
    sink: Sink,
    threshold: Level,
    reporter: Arc<dyn FailureReporter>,
}

impl LoggerBuilder {
    /// Discard marshaller, discard sink, Info threshold, stderr reporting
    pub fn new() -> Self {
        Self {
            marshaller: Box::new(DiscardMarshaller::new()),
            sink: Box::new(io::sink()),
            threshold: DEFAULT_LEVEL,
            reporter: Arc::new(StderrReporter),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn marshaller<M: Marshaller + 'static>(mut self, marshaller: M) -> Self {
        self.marshaller = Box::new(marshaller);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Where marshal and write failures are reported
    #[must_use = "builder methods return a new value"]
    pub fn failure_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            marshaller: self.marshaller,
            sink: Mutex::new(self.sink),
            threshold: self.threshold,
            reporter: self.reporter,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Marshals an entry to its bare message
    struct MessageMarshaller;

    impl Marshaller for MessageMarshaller {
        fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
            Ok(entry.message.clone().into_bytes())
        }

        fn name(&self) -> &str {
            "message"
        }
    }

    struct FailingMarshaller;

    impl Marshaller for FailingMarshaller {
        fn marshal(&self, _entry: &Entry) -> Result<Vec<u8>> {
            let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            Err(LoggerError::encoding("test", err))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        writes: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl RecordingSink {
        fn calls(&self) -> usize {
            self.writes.lock().len()
        }
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.lock().push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "collector gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn counting_reporter() -> (Arc<AtomicUsize>, Arc<dyn FailureReporter>) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let reporter: Arc<dyn FailureReporter> = Arc::new(move |_: &LoggerError| {
            count_clone.fetch_add(1, Ordering::Relaxed);
        });
        (count, reporter)
    }

    #[test]
    fn test_debug_logger_message() {
        let sink = RecordingSink::default();
        let logger = Logger::new(MessageMarshaller, sink.clone(), Level::Debug);

        logger.debug("this is a debug message", [Field::new("user_id", 12345)]);

        assert_eq!(sink.calls(), 1);
        assert_eq!(sink.writes.lock()[0], b"this is a debug message".to_vec());
    }

    #[test]
    fn test_does_not_log_below_threshold() {
        let sink = RecordingSink::default();
        let logger = Logger::new(MessageMarshaller, sink.clone(), Level::Info);

        logger.debug("foo message", [Field::new("user_id", 12345)]);

        assert_eq!(sink.calls(), 0);
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_info_passes_both_thresholds() {
        for threshold in Level::ALL {
            let sink = RecordingSink::default();
            let logger = Logger::new(MessageMarshaller, sink.clone(), threshold);
            logger.info("hello", Vec::new());
            assert_eq!(sink.calls(), 1, "threshold {threshold}");
        }
    }

    #[test]
    fn test_marshal_failure_skips_write() {
        let sink = RecordingSink::default();
        let (reported, reporter) = counting_reporter();
        let logger = Logger::builder()
            .marshaller(FailingMarshaller)
            .sink(sink.clone())
            .failure_reporter(reporter)
            .build();

        logger.info("never written", Vec::new());

        assert_eq!(sink.calls(), 0);
        assert_eq!(reported.load(Ordering::Relaxed), 1);
        assert_eq!(logger.metrics().marshal_failures(), 1);
        assert_eq!(logger.metrics().write_failures(), 0);
    }

    #[test]
    fn test_write_failure_is_reported_not_raised() {
        let (reported, reporter) = counting_reporter();
        let logger = Logger::builder()
            .marshaller(MessageMarshaller)
            .sink(BrokenSink)
            .failure_reporter(reporter)
            .build();

        logger.info("lost", Vec::new());
        logger.info("lost again", Vec::new());

        assert_eq!(reported.load(Ordering::Relaxed), 2);
        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().marshal_failures(), 0);
    }

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.threshold(), Level::Info);
        assert_eq!(logger.marshaller_name(), "discard");
    }

    #[test]
    fn test_discard_all() {
        let logger = Logger::discard_all();
        logger.info("dropped", [Field::new("k", "v")]);
        logger.debug("filtered", Vec::new());

        assert_eq!(logger.metrics().total_written(), 1);
        assert_eq!(logger.metrics().filtered_count(), 1);
    }
}
