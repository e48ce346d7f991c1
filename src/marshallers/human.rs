//! Human-readable single-line output

use crate::core::{Entry, LogInfo, Marshaller, Result};

const SEPARATOR: &str = ", ";

/// Renders `[<ts>], <app>.<env>, <channel>.<level>, <message>, [<k>:<v>, ...]`
///
/// Separators inside messages or field values are not escaped.
#[derive(Debug, Clone)]
pub struct HumanMarshaller {
    info: LogInfo,
}

impl HumanMarshaller {
    pub fn new(info: LogInfo) -> Self {
        Self { info }
    }

    pub fn log_info(&self) -> &LogInfo {
        &self.info
    }

    fn format_line(&self, entry: &Entry) -> String {
        let fields = entry
            .fields
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        format!(
            "[{}]{sep}{}.{}{sep}{}.{}{sep}{}{sep}[{}]\n",
            entry.rfc3339_timestamp(),
            self.info.application,
            self.info.environment,
            self.info.channel,
            entry.level,
            entry.message,
            fields,
            sep = SEPARATOR,
        )
    }
}

impl Marshaller for HumanMarshaller {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
        Ok(self.format_line(entry).into_bytes())
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Level};
    use chrono::{TimeZone, Utc};

    fn marshaller() -> HumanMarshaller {
        HumanMarshaller::new(LogInfo::new("my-chan", "api", "test", "web-1"))
    }

    fn entry(fields: Vec<Field>) -> Entry {
        let at = Utc.with_ymd_and_hms(2023, 1, 2, 15, 4, 5).single().expect("valid datetime");
        Entry::new(Level::Info, "Running...", fields).with_timestamp(at)
    }

    #[test]
    fn test_human_line() {
        let entry = entry(vec![
            Field::new("newField1", "value1"),
            Field::new("newField2", 2),
        ]);
        let output = String::from_utf8(marshaller().marshal(&entry).unwrap()).unwrap();

        assert_eq!(
            output,
            "[2023-01-02T15:04:05Z], api.test, my-chan.info, Running..., [newField1:value1, newField2:2]\n"
        );
    }

    #[test]
    fn test_human_line_without_fields() {
        let output = String::from_utf8(marshaller().marshal(&entry(Vec::new())).unwrap()).unwrap();
        assert_eq!(output, "[2023-01-02T15:04:05Z], api.test, my-chan.info, Running..., []\n");
    }

    #[test]
    fn test_human_keeps_field_order_and_duplicates() {
        let entry = entry(vec![
            Field::new("b", 1),
            Field::new("a", 2),
            Field::new("b", 3),
        ]);
        let output = String::from_utf8(marshaller().marshal(&entry).unwrap()).unwrap();
        assert!(output.ends_with("[b:1, a:2, b:3]\n"));
    }

    #[test]
    fn test_human_does_not_escape() {
        let entry = entry(vec![Field::new("list", "x, y")]);
        let output = String::from_utf8(marshaller().marshal(&entry).unwrap()).unwrap();
        assert!(output.contains("[list:x, y]"));
    }
}
