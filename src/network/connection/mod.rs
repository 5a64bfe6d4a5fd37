//! Connection - Handles an individual client connection.
//!
//! Each connection is two Tokio tasks:
//!
//! ```text
//!   socket ──▶ FramedRead<LineCodec> ──▶ read loop ──▶ Registry ──▶ handlers
//!                                           ▲                         │
//!                             disconnect    │                         ▼
//!                              requests ────┘              outbound queue (mpsc)
//!                                                                     │
//!   socket ◀── FramedWrite<LineCodec> ◀── writer task ◀───────────────┘
//! ```
//!
//! The read loop owns the [`SessionState`]; other sessions reach this one
//! only through its [`Client`] handle.

mod dispatch;
mod error_handling;
mod lifecycle;
mod writer;

pub use dispatch::{process_line, LineOutcome};

use error_handling::classify_read_error;

use crate::handlers::{server_reply, Registry};
use crate::state::{Client, Matrix, Outbound, SessionState};
use futures_util::StreamExt;
use slirc_lite_proto::{DecodedLine, LineCodec, Response};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, info, instrument, warn};

/// A client connection handler.
pub struct Connection {
    client: Arc<Client>,
    outbox: mpsc::Receiver<Outbound>,
    stream: TcpStream,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        registry: Arc<Registry>,
    ) -> Self {
        let (client, outbox) = Client::new(
            matrix.client_ids.next(),
            addr.to_string(),
            matrix.limits.send_queue,
        );
        Self {
            client,
            outbox,
            stream,
            matrix,
            registry,
        }
    }

    /// Run the connection until the session ends, then tear it down.
    #[instrument(
        skip(self),
        fields(client = %self.client.id, addr = %self.client.address),
        name = "connection"
    )]
    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            client,
            outbox,
            stream,
            matrix,
            registry,
        } = self;
        let limits = &matrix.limits;

        let (read_half, write_half) = stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::with_max_len(limits.max_line_length));
        let sink = FramedWrite::new(write_half, LineCodec::with_max_len(limits.max_line_length));
        let mut writer = tokio::spawn(writer::write_loop(sink, outbox, Arc::clone(&client)));

        let mut state = SessionState::new();

        let reason = loop {
            tokio::select! {
                reason = client.disconnect_requested() => {
                    debug!(%reason, "Disconnect requested");
                    break reason;
                }
                item = reader.next() => match item {
                    None => break "Connection closed".to_string(),
                    Some(Err(e)) => {
                        let action = classify_read_error(&e);
                        warn!(error = %e, "Read failed");
                        break action.reason().to_string();
                    }
                    Some(Ok(DecodedLine::TooLong { limit })) => {
                        warn!(limit, "Input line too long");
                        let reply = server_reply(
                            &matrix.server_info.name,
                            Response::ERR_INPUTTOOLONG,
                            format!("{} :Input line too long", client.nick_or_star()),
                        );
                        if let Err(e) = client.send(reply, limits.send_timeout()).await {
                            break e.to_string();
                        }
                    }
                    Some(Ok(DecodedLine::Line(line))) => {
                        match process_line(&line, &client, &matrix, &registry, &mut state).await {
                            LineOutcome::Continue => {}
                            LineOutcome::Quit(reason) | LineOutcome::Disconnect(reason) => {
                                break reason;
                            }
                        }
                    }
                },
            }
        };

        lifecycle::teardown(&client, &matrix, &mut state, &reason);

        let grace = limits.close_grace();
        if client.close(grace).await.is_err() {
            debug!("Writer already gone");
        }
        if tokio::time::timeout(grace, &mut writer).await.is_err() {
            warn!("Writer did not finish flushing, aborting");
            writer.abort();
        }

        info!(%reason, "Connection closed");
        Ok(())
    }
}
