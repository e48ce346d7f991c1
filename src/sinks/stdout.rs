//! Standard output sink

use std::io::{self, Write};

/// Writes each entry to standard output and flushes it immediately
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut out = io::stdout().lock();
        out.write_all(buf)?;
        out.flush()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_reports_full_length() {
        let mut sink = StdoutSink::new();
        let written = sink.write(b"stdout sink test\n").unwrap();
        assert_eq!(written, 17);
        sink.flush().unwrap();
    }
}
