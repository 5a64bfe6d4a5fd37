//! QUIT handler for terminating client sessions.

use super::super::{relay, Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use slirc_lite_proto::Message;
use tracing::info;

/// Handler for QUIT command.
///
/// Notifies every occupied room (sender included), sends the closing
/// ERROR line and ends the session. Teardown happens in the connection
/// loop once this returns.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let reason = msg
            .params
            .strip_prefix(':')
            .filter(|r| !r.is_empty())
            .unwrap_or("Quit")
            .to_string();

        let client = ctx.client;
        let notice = relay(client, "QUIT", format!(":{reason}"));
        for room in ctx.state.rooms() {
            room.broadcast_to_all(&notice);
        }
        ctx.state.quit_announced = true;

        ctx.send(Message::new(
            "ERROR",
            format!(":Closing Link: {} ({})", client.address, reason),
        ))
        .await?;

        info!(
            client = %client.id,
            nick = ?client.nickname(),
            message = %reason,
            "Client quit"
        );

        // Signal quit by returning Quit error that connection loop will handle
        Err(HandlerError::Quit(reason))
    }
}
