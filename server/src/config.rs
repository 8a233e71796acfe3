//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Where the server listens and under which prefix the routes are mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The base path with a leading slash and no trailing slash, or `None`
    /// when routes are served from the root.
    pub fn mount_point(&self) -> Option<String> {
        let trimmed = self.base_path.trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}
