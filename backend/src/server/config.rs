//! HTTP server configuration object and helpers.

use std::net::{Ipv4Addr, SocketAddr};

/// Port used when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a configuration bound to an explicit socket address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Listen on every IPv4 interface at `port`.
    #[must_use]
    pub fn from_port(port: u16) -> Self {
        Self::new(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.bind_addr.port()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_port(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8080)]
    #[case(3000)]
    #[case(0)]
    fn from_port_binds_all_interfaces(#[case] port: u16) {
        let config = ServerConfig::from_port(port);
        assert_eq!(config.bind_addr().ip(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(config.port(), port);
    }

    #[test]
    fn default_uses_port_8080() {
        assert_eq!(ServerConfig::default().port(), DEFAULT_PORT);
    }
}
