//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the listening socket and spawns a Connection task for
//! each incoming client.

use crate::handlers::Registry;
use crate::network::Connection;
use crate::state::Matrix;
use anyhow::Context as _;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(addr: SocketAddr, matrix: Arc<Matrix>) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let local = listener.local_addr()?;
        info!(addr = %local, server = %matrix.server_info.name, "Listener bound");

        Ok(Self {
            listener,
            matrix,
            registry: Arc::new(Registry::new()),
        })
    }

    /// The address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!(%addr, "Connection accepted");

                    if let Err(e) = stream.set_nodelay(true) {
                        error!(%addr, error = %e, "Failed to set TCP_NODELAY");
                    }

                    let connection = Connection::new(
                        stream,
                        addr,
                        Arc::clone(&self.matrix),
                        Arc::clone(&self.registry),
                    );
                    tokio::spawn(async move {
                        if let Err(e) = connection.run().await {
                            error!(%addr, error = %e, "Connection error");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
