//! Test server management.
//!
//! Runs an in-process Gateway on an ephemeral loopback port.

use slircd_lite::config::{Config, ListenConfig};
use slircd_lite::network::Gateway;
use slircd_lite::state::Matrix;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A test server instance. Stops when dropped.
pub struct TestServer {
    addr: SocketAddr,
    task: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    /// Spawn a server with the default configuration.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with_config(Config::default()).await
    }

    /// Spawn a server with `config`; its listen address is replaced by
    /// `127.0.0.1:0`.
    pub async fn spawn_with_config(mut config: Config) -> anyhow::Result<Self> {
        config.listen = ListenConfig {
            address: "127.0.0.1:0".parse()?,
        };
        let matrix = Arc::new(Matrix::new(&config));
        let gateway = Gateway::bind(config.listen.address, matrix).await?;
        let addr = gateway.local_addr()?;
        let task = tokio::spawn(gateway.run());
        Ok(Self { addr, task })
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Create a new test client connected to this server.
    pub async fn connect(&self, nick: &str) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.address(), nick).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
