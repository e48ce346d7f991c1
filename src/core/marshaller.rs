//! Marshaller trait for log output formats

use super::{entry::Entry, error::Result};

/// Encodes an entry into the bytes handed to a sink.
///
/// On error the returned bytes are never written.
pub trait Marshaller: Send + Sync {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}

impl<M: Marshaller + ?Sized> Marshaller for Box<M> {
    fn marshal(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).marshal(entry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
