//! JOIN command handler.
//!
//! ## Syntax
//! ```text
//! JOIN <#room>[,<#room>...]
//! ```
//!
//! ## Behavior
//! - The whole list must be valid or nothing is joined (403)
//! - Rooms are created on first join
//! - Rooms already joined are skipped silently
//! - Per room: JOIN broadcast to all members (joiner included), then
//!   331, 353 and 366 to the joiner

use super::super::{err_nosuchchannel, relay, Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use slirc_lite_proto::{parse_channel_list, Message, Response};
use std::sync::Arc;
use tracing::info;

pub struct JoinHandler;

#[async_trait]
impl Handler for JoinHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        if msg.params.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let client = ctx.client;
        let nick = ctx.nick_or_star();

        let Some(names) = parse_channel_list(&msg.params) else {
            let reply = err_nosuchchannel(ctx.server_name(), &nick, &msg.params);
            return ctx.send(reply).await;
        };

        for name in names {
            if ctx.state.is_in(name) {
                continue;
            }

            let room = ctx.matrix.rooms.get_or_create(name);
            ctx.state.join(Arc::clone(&room), client);
            room.broadcast_to_all(&relay(client, "JOIN", name));

            ctx.send_reply(Response::RPL_NOTOPIC, format!("{nick} {name} :No topic is set"))
                .await?;
            ctx.send_reply(
                Response::RPL_NAMREPLY,
                format!("{nick} = {name} :{}", room.member_nicknames()),
            )
            .await?;
            ctx.send_reply(
                Response::RPL_ENDOFNAMES,
                format!("{nick} {name} :End of NAMES list"),
            )
            .await?;

            info!(nick = %nick, room = %name, members = room.len(), "Joined room");
        }

        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
