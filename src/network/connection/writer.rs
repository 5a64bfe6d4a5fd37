//! Outbound half of a connection.

use crate::state::{Client, Outbound};
use futures_util::SinkExt;
use slirc_lite_proto::LineCodec;
use std::sync::Arc;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio_util::codec::FramedWrite;
use tracing::{debug, warn};

/// Drain `outbox` onto the socket until it closes or a `Close` arrives.
///
/// A write failure asks the read loop to end the session.
pub(super) async fn write_loop<W>(
    mut sink: FramedWrite<W, LineCodec>,
    mut outbox: mpsc::Receiver<Outbound>,
    client: Arc<Client>,
) where
    W: AsyncWrite + Unpin,
{
    while let Some(item) = outbox.recv().await {
        match item {
            Outbound::Line(msg) => {
                if let Err(e) = sink.send(msg.to_string()).await {
                    warn!(client = %client.id, error = %e, "Write error");
                    client.request_disconnect("Write error");
                    return;
                }
            }
            Outbound::Close => break,
        }
    }

    if let Err(e) = sink.close().await {
        debug!(client = %client.id, error = %e, "Error closing socket");
    }
}
