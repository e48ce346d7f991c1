//! Logger configuration from a DSN
//!
//! A DSN selects the publisher with its scheme and the threshold with a
//! `level` query parameter:
//!
//! ```text
//! stdout://?level=debug
//! kibana://?level=info
//! kibana://logs.internal:514?level=debug
//! discardall://
//! ```

use super::{
    error::{LoggerError, Result},
    level::{Level, DEFAULT_LEVEL},
    log_info::LogInfo,
    logger::Logger,
};
use crate::sinks::DEFAULT_FACILITY;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Channel every DSN-built logger reports under unless configured otherwise
pub const DEFAULT_CHANNEL: &str = "Lernin";

/// Destination selected by the DSN scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publisher {
    /// Human-readable lines on standard output
    Stdout,
    /// Logstash JSON through syslog
    Kibana,
    /// Nothing is written
    DiscardAll,
}

impl Publisher {
    pub fn scheme(&self) -> &'static str {
        match self {
            Publisher::Stdout => "stdout",
            Publisher::Kibana => "kibana",
            Publisher::DiscardAll => "discardall",
        }
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Publisher {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" => Ok(Publisher::Stdout),
            "kibana" => Ok(Publisher::Kibana),
            "discardall" => Ok(Publisher::DiscardAll),
            other => Err(LoggerError::invalid_publisher(other)),
        }
    }
}

/// A parsed and validated DSN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    publisher: Publisher,
    level: Level,
    syslog_address: Option<String>,
}

impl Dsn {
    /// Fails with `InvalidDsn`, then `InvalidLevel`, then `InvalidPublisherType`
    pub fn parse(dsn: &str) -> Result<Self> {
        let url = Url::parse(dsn).map_err(|e| LoggerError::invalid_dsn(dsn, e))?;
        let level = level_from_url(&url)?;
        let publisher = url.scheme().parse::<Publisher>()?;

        let syslog_address = url
            .host_str()
            .filter(|host| !host.is_empty())
            .map(|host| match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => format!("{}:{}", host, DEFAULT_SYSLOG_PORT),
            });

        Ok(Self {
            publisher,
            level,
            syslog_address,
        })
    }

    pub fn publisher(&self) -> Publisher {
        self.publisher
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Remote collector for `kibana://host[:port]`; `None` means the local daemon
    pub fn syslog_address(&self) -> Option<&str> {
        self.syslog_address.as_deref()
    }

    /// Open the sink and assemble the logger
    pub fn into_logger(self, info: LogInfo) -> Result<Logger> {
        match self.publisher {
            Publisher::Stdout => Ok(Logger::stdout(info, self.level)),
            Publisher::Kibana => match self.syslog_address {
                Some(address) => {
                    Logger::syslog_to_logstash_udp(info, self.level, DEFAULT_FACILITY, &address)
                }
                None => Logger::syslog_to_logstash(info, self.level, DEFAULT_FACILITY),
            },
            Publisher::DiscardAll => Ok(Logger::discard_all()),
        }
    }
}

impl FromStr for Dsn {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Dsn::parse(s)
    }
}

const DEFAULT_SYSLOG_PORT: u16 = 514;

/// First `level` query value; absent means the default level
fn level_from_url(url: &Url) -> Result<Level> {
    match url.query_pairs().find(|(key, _)| key == "level") {
        Some((_, value)) => value.parse(),
        None => Ok(DEFAULT_LEVEL),
    }
}

/// Everything a host process supplies to build its logger
///
/// Deserializable so it can sit inside the host's own config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    pub dsn: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

impl LoggerConfig {
    pub fn new(
        dsn: impl Into<String>,
        application: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            dsn: dsn.into(),
            application: application.into(),
            environment: environment.into(),
            channel: default_channel(),
        }
    }

    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Validate the DSN and build the logger; no logger is returned on error
    pub fn build(&self) -> Result<Logger> {
        let dsn = Dsn::parse(&self.dsn)?;
        let info = LogInfo::detect(
            self.channel.as_str(),
            self.application.as_str(),
            self.environment.as_str(),
        );
        dsn.into_logger(info)
    }
}

impl Logger {
    /// Build a logger from a DSN such as `stdout://?level=debug`
    pub fn from_dsn(dsn: &str, application: &str, environment: &str) -> Result<Logger> {
        LoggerConfig::new(dsn, application, environment).build()
    }
}
