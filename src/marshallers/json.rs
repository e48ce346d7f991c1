//! Plain JSON encoding of an entry

use crate::core::{Entry, LoggerError, Marshaller, Result};

/// Serializes the entry's own shape: `message`, `fields`, `level`, `time`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMarshaller;

impl JsonMarshaller {
    pub fn new() -> Self {
        Self
    }
}

impl Marshaller for JsonMarshaller {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
        serde_json::to_vec(entry).map_err(|e| LoggerError::encoding("json", e))
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Level};

    #[test]
    fn test_json_shape() {
        let entry = Entry::new(Level::Debug, "foo message", vec![Field::new("user_id", 12345)]);
        let bytes = JsonMarshaller::new().marshal(&entry).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["message"], "foo message");
        assert_eq!(parsed["level"], "debug");
        assert_eq!(parsed["fields"][0]["key"], "user_id");
        assert_eq!(parsed["fields"][0]["value"], 12345);
        assert!(parsed["time"].is_string());
    }

    #[test]
    fn test_json_roundtrips_entry() {
        let entry = Entry::new(Level::Info, "hello", vec![Field::new("ok", true)]);
        let bytes = JsonMarshaller::new().marshal(&entry).unwrap();
        let decoded: Entry = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, entry);
    }
}
