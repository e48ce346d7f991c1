//! Output identity shared by marshallers

/// Channel, application, environment and host a logger speaks for.
///
/// Resolved once when the logger is built and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogInfo {
    pub channel: String,
    pub application: String,
    pub environment: String,
    pub hostname: String,
}

impl LogInfo {
    pub fn new(
        channel: impl Into<String>,
        application: impl Into<String>,
        environment: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            application: application.into(),
            environment: environment.into(),
            hostname: hostname.into(),
        }
    }

    /// Build with the hostname of the local machine
    pub fn detect(
        channel: impl Into<String>,
        application: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self::new(channel, application, environment, local_hostname())
    }

    /// Syslog tag, `<application>.<environment>`
    pub fn tag(&self) -> String {
        format!("{}.{}", self.application, self.environment)
    }
}

/// Hostname of this machine, or an empty string if it cannot be determined
pub fn local_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag() {
        let info = LogInfo::new("my-chan", "api", "test", "web-1");
        assert_eq!(info.tag(), "api.test");
    }

    #[test]
    fn test_detect_uses_local_hostname() {
        let info = LogInfo::detect("my-chan", "api", "test");
        assert_eq!(info.hostname, local_hostname());
        assert_eq!(info.channel, "my-chan");
    }
}
