//! Logstash-compatible JSON, optionally framed for rsyslog
//!
//! The document carries fixed metadata keys plus every entry field as a string
//! value. Keys are emitted in lexicographic order, so the same entry always
//! encodes to the same bytes.

use crate::core::{Entry, LogInfo, LoggerError, Marshaller, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Prefix rsyslog's mmjsonparse expects in front of a JSON payload
pub const CEE_PREFIX: &[u8] = b"@cee: ";

/// Field keys logstash uses itself; user fields with these names get an `x` suffix
const RESERVED_KEYS: [&str; 2] = ["error", "type"];

const RESERVED_SUFFIX: char = 'x';

#[derive(Debug, Clone)]
pub struct LogstashMarshaller {
    info: LogInfo,
}

impl LogstashMarshaller {
    pub fn new(info: LogInfo) -> Self {
        Self { info }
    }

    pub fn log_info(&self) -> &LogInfo {
        &self.info
    }

    fn document(&self, entry: &Entry) -> BTreeMap<String, Value> {
        let mut data = BTreeMap::new();
        data.insert("@version".to_string(), Value::from(1));
        data.insert("@timestamp".to_string(), Value::from(entry.rfc3339_timestamp()));
        data.insert("severity".to_string(), Value::from(entry.level.as_str()));
        data.insert("message".to_string(), Value::from(entry.message.as_str()));
        data.insert("app_server_name".to_string(), Value::from(self.info.hostname.as_str()));
        data.insert("channel".to_string(), Value::from(self.info.channel.as_str()));
        data.insert("application".to_string(), Value::from(self.info.application.as_str()));
        data.insert("env".to_string(), Value::from(self.info.environment.as_str()));

        // Later fields overwrite earlier ones that land on the same key.
        for field in &entry.fields {
            data.insert(field_key(&field.key), Value::String(field.value.to_string()));
        }
        data
    }
}

fn field_key(key: &str) -> String {
    if RESERVED_KEYS.contains(&key) {
        let mut renamed = String::with_capacity(key.len() + 1);
        renamed.push_str(key);
        renamed.push(RESERVED_SUFFIX);
        renamed
    } else {
        key.to_string()
    }
}

impl Marshaller for LogstashMarshaller {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut encoded = serde_json::to_vec(&self.document(entry))
            .map_err(|e| LoggerError::encoding("logstash", e))?;

        if encoded.last() != Some(&b'\n') {
            encoded.push(b'\n');
        }
        Ok(encoded)
    }

    fn name(&self) -> &str {
        "logstash"
    }
}

/// Logstash JSON prefixed with `@cee: ` for rsyslog
///
/// See <http://www.rsyslog.com/doc/mmjsonparse.html>
#[derive(Debug, Clone)]
pub struct SyslogLogstashMarshaller {
    inner: LogstashMarshaller,
}

impl SyslogLogstashMarshaller {
    pub fn new(info: LogInfo) -> Self {
        Self {
            inner: LogstashMarshaller::new(info),
        }
    }

    pub fn log_info(&self) -> &LogInfo {
        self.inner.log_info()
    }
}

impl Marshaller for SyslogLogstashMarshaller {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
        let body = self.inner.marshal(entry)?;

        let mut framed = Vec::with_capacity(CEE_PREFIX.len() + body.len());
        framed.extend_from_slice(CEE_PREFIX);
        framed.extend_from_slice(&body);
        Ok(framed)
    }

    fn name(&self) -> &str {
        "syslog-logstash"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Level};

    fn info() -> LogInfo {
        LogInfo::new("my-chan", "api", "test", "web-1")
    }

    fn fake_entry() -> Entry {
        Entry::new(Level::Debug, "foo message", vec![Field::new("user_id", 12345)])
    }

    fn expected_body(entry: &Entry) -> String {
        format!(
            "{{\"@timestamp\":\"{}\",\"@version\":1,\"app_server_name\":\"web-1\",\"application\":\"api\",\"channel\":\"my-chan\",\"env\":\"test\",\"message\":\"foo message\",\"severity\":\"debug\",\"user_id\":\"12345\"}}\n",
            entry.rfc3339_timestamp()
        )
    }

    #[test]
    fn test_logstash_marshaller() {
        let entry = fake_entry();
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected_body(&entry));
    }

    #[test]
    fn test_syslog_to_logstash_marshaller() {
        let entry = fake_entry();
        let output = SyslogLogstashMarshaller::new(info()).marshal(&entry).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("@cee: {}", expected_body(&entry))
        );
    }

    #[test]
    fn test_reserved_keys_are_renamed() {
        let entry = Entry::new(
            Level::Info,
            "failed",
            vec![Field::new("error", "timeout"), Field::new("type", "db")],
        );
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["errorx"], "timeout");
        assert_eq!(parsed["typex"], "db");
        assert!(parsed.get("error").is_none());
        assert!(parsed.get("type").is_none());
    }

    #[test]
    fn test_error_and_float_fields_render_as_text() {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db down");
        let entry = Entry::new(
            Level::Info,
            "failed",
            vec![Field::display("error", &err), Field::new("f", 1e21)],
        );
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["errorx"], "db down");
        assert_eq!(parsed["f"], "1e+21");
    }

    #[test]
    fn test_last_field_wins_on_collision() {
        let entry = Entry::new(
            Level::Info,
            "collide",
            vec![
                Field::new("error", "first"),
                Field::new("errorx", "second"),
                Field::new("k", 1),
                Field::new("k", 2),
            ],
        );
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["errorx"], "second");
        assert_eq!(parsed["k"], "2");
    }

    #[test]
    fn test_field_can_override_metadata() {
        let entry = Entry::new(Level::Info, "original", vec![Field::new("message", "replaced")]);
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["message"], "replaced");
    }

    #[test]
    fn test_output_is_single_line() {
        let entry = Entry::new(Level::Info, "multi\nline", vec![Field::new("v", "a\nb")]);
        let output = LogstashMarshaller::new(info()).marshal(&entry).unwrap();

        assert_eq!(output.iter().filter(|&&b| b == b'\n').count(), 1);
        assert_eq!(output.last(), Some(&b'\n'));
    }

    #[test]
    fn test_marshal_is_idempotent() {
        let entry = fake_entry();
        let marshaller = SyslogLogstashMarshaller::new(info());
        assert_eq!(
            marshaller.marshal(&entry).unwrap(),
            marshaller.marshal(&entry).unwrap()
        );
    }
}
