//! Marshaller implementations

pub mod discard;
pub mod human;
pub mod json;
pub mod logstash;

pub use discard::DiscardMarshaller;
pub use human::HumanMarshaller;
pub use json::JsonMarshaller;
pub use logstash::{LogstashMarshaller, SyslogLogstashMarshaller, CEE_PREFIX};

pub use crate::core::Marshaller;
