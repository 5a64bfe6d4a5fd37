//! Network listener configuration.

use super::defaults::{default_listen_address, DEFAULT_PORT};
use serde::Deserialize;
use std::net::SocketAddr;

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:6667").
    #[serde(default = "default_listen_address")]
    pub address: SocketAddr,
}

impl ListenConfig {
    /// Listen on all interfaces on `port`.
    pub fn with_port(port: u16) -> Self {
        let mut address = default_listen_address();
        address.set_port(port);
        Self { address }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self::with_port(DEFAULT_PORT)
    }
}
