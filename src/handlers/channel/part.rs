//! PART command handler.
//!
//! ## Syntax
//! ```text
//! PART <#room>[,<#room>...][ :<reason>]
//! ```
//!
//! ## Behavior
//! - A malformed list or reason answers 461
//! - Rooms not joined answer 442 and are skipped
//! - PART is broadcast to all members (leaver included) before removal

use super::super::{err_notonchannel, relay, Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use slirc_lite_proto::{parse_channel_list, Message};
use tracing::info;

pub struct PartHandler;

/// Split PART params into the room list and the optional reason.
///
/// The list ends at the first space; anything after it must be
/// whitespace, a `:` and a non-empty reason.
fn parse_part_params(params: &str) -> Option<(Vec<&str>, Option<&str>)> {
    let (list, rest) = match params.split_once(' ') {
        Some((list, rest)) => (list, Some(rest)),
        None => (params, None),
    };

    let rooms = parse_channel_list(list)?;

    let reason = match rest {
        None => None,
        Some(rest) => {
            let reason = rest
                .trim_start_matches(|c: char| c.is_ascii_whitespace())
                .strip_prefix(':')?;
            if reason.is_empty() {
                return None;
            }
            Some(reason)
        }
    };

    Some((rooms, reason))
}

#[async_trait]
impl Handler for PartHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let (rooms, reason) = parse_part_params(&msg.params).ok_or(HandlerError::NeedMoreParams)?;

        let client = ctx.client;
        let nick = ctx.nick_or_star();

        for name in rooms {
            let Some(room) = ctx.state.room(name).cloned() else {
                let reply = err_notonchannel(ctx.server_name(), &nick, name);
                ctx.send(reply).await?;
                continue;
            };

            let params = match reason {
                Some(reason) => format!("{name} :{reason}"),
                None => name.to_string(),
            };
            room.broadcast_to_all(&relay(client, "PART", params));
            ctx.state.leave(name, client);

            info!(nick = %nick, room = %name, reason = ?reason, "Left room");
        }

        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
