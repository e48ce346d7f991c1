//! Marshaller that produces nothing

use crate::core::{Entry, Marshaller, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardMarshaller;

impl DiscardMarshaller {
    pub fn new() -> Self {
        Self
    }
}

impl Marshaller for DiscardMarshaller {
    fn marshal(&self, _entry: &Entry) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "discard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Level};

    #[test]
    fn test_discard_is_empty() {
        let entry = Entry::new(Level::Info, "anything", vec![Field::new("k", "v")]);
        let bytes = DiscardMarshaller::new().marshal(&entry).unwrap();
        assert!(bytes.is_empty());
    }
}
