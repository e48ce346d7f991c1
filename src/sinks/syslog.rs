//! Syslog sink
//!
//! Sends each write as one syslog message, either to the local syslog daemon
//! over a Unix socket or to a remote collector over UDP.
//!
//! Local messages use the short BSD header:
//!
//! ```text
//! <158>Jan  2 15:04:05 api.test[4242]: @cee: {...}
//! ```
//!
//! Remote messages carry an RFC 3339 timestamp and the sending host:
//!
//! ```text
//! <158>2023-01-02T15:04:05Z web-1 api.test[4242]: @cee: {...}
//! ```

use crate::core::Level;
use chrono::{Local, SecondsFormat, Utc};
use std::fmt;
use std::io::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::{UnixDatagram, UnixStream};
#[cfg(unix)]
use std::path::Path;

/// Well-known locations of the local syslog socket, tried in order
#[cfg(unix)]
pub const LOCAL_SOCKET_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Facility used for every message a DSN-built syslog logger sends
pub const DEFAULT_FACILITY: Facility = Facility::Local3;

/// Syslog facility codes (RFC 5424 section 6.2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

/// Syslog severity codes (RFC 5424 section 6.2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Informational,
        }
    }
}

/// PRI value: `facility * 8 + severity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    pub facility: Facility,
    pub severity: Severity,
}

impl Priority {
    pub fn new(facility: Facility, severity: Severity) -> Self {
        Self { facility, severity }
    }

    pub fn value(&self) -> u8 {
        (self.facility as u8) * 8 + self.severity as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value())
    }
}

enum Transport {
    #[cfg(unix)]
    UnixDatagram(UnixDatagram),
    #[cfg(unix)]
    UnixStream(UnixStream),
    Udp(UdpSocket),
}

/// A syslog connection with a fixed priority and tag
pub struct SyslogWriter {
    transport: Transport,
    priority: Priority,
    tag: String,
    hostname: String,
    pid: u32,
}

impl SyslogWriter {
    /// Connect to the local syslog daemon
    #[cfg(unix)]
    pub fn local(priority: Priority, tag: impl Into<String>) -> io::Result<Self> {
        let tag = tag.into();
        for path in LOCAL_SOCKET_PATHS {
            if let Ok(writer) = Self::unix(path, priority, tag.clone()) {
                return Ok(writer);
            }
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no local syslog socket accepted a connection",
        ))
    }

    #[cfg(not(unix))]
    pub fn local(_priority: Priority, _tag: impl Into<String>) -> io::Result<Self> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "local syslog is only available on Unix platforms",
        ))
    }

    /// Connect to a syslog Unix socket at `path`, datagram first, then stream
    #[cfg(unix)]
    pub fn unix(path: impl AsRef<Path>, priority: Priority, tag: impl Into<String>) -> io::Result<Self> {
        let path = path.as_ref();
        let transport = match UnixDatagram::unbound().and_then(|socket| {
            socket.connect(path)?;
            Ok(socket)
        }) {
            Ok(socket) => Transport::UnixDatagram(socket),
            Err(_) => Transport::UnixStream(UnixStream::connect(path)?),
        };

        Ok(Self {
            transport,
            priority,
            tag: tag.into(),
            hostname: String::new(),
            pid: std::process::id(),
        })
    }

    /// Send datagrams to a remote syslog collector
    pub fn udp(
        addr: impl ToSocketAddrs,
        priority: Priority,
        tag: impl Into<String>,
        hostname: impl Into<String>,
    ) -> io::Result<Self> {
        let target = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "syslog address did not resolve")
        })?;
        let local: SocketAddr = match target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local)?;
        socket.connect(target)?;

        Ok(Self {
            transport: Transport::Udp(socket),
            priority,
            tag: tag.into(),
            hostname: hostname.into(),
            pid: std::process::id(),
        })
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn frame(&self, msg: &[u8]) -> Vec<u8> {
        let header = match self.transport {
            Transport::Udp(_) => format!(
                "{}{} {} {}[{}]: ",
                self.priority,
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                self.hostname,
                self.tag,
                self.pid
            ),
            #[cfg(unix)]
            _ => format!(
                "{}{} {}[{}]: ",
                self.priority,
                Local::now().format("%b %e %H:%M:%S"),
                self.tag,
                self.pid
            ),
        };

        let mut frame = Vec::with_capacity(header.len() + msg.len() + 1);
        frame.extend_from_slice(header.as_bytes());
        frame.extend_from_slice(msg);
        if msg.last() != Some(&b'\n') {
            frame.push(b'\n');
        }
        frame
    }
}

impl Write for SyslogWriter {
    /// Each call is one syslog message
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let frame = self.frame(buf);
        match &mut self.transport {
            #[cfg(unix)]
            Transport::UnixDatagram(socket) => {
                socket.send(&frame)?;
            }
            #[cfg(unix)]
            Transport::UnixStream(stream) => stream.write_all(&frame)?,
            Transport::Udp(socket) => {
                socket.send(&frame)?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.transport {
            #[cfg(unix)]
            Transport::UnixStream(stream) => stream.flush(),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for SyslogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transport = match self.transport {
            #[cfg(unix)]
            Transport::UnixDatagram(_) => "unixgram",
            #[cfg(unix)]
            Transport::UnixStream(_) => "unix",
            Transport::Udp(_) => "udp",
        };
        f.debug_struct("SyslogWriter")
            .field("transport", &transport)
            .field("priority", &self.priority.value())
            .field("tag", &self.tag)
            .finish()
    }
}
