//! NICK handler.

use super::super::{relay, Context, Handler, HandlerResult};
use crate::error::ClaimError;
use async_trait::async_trait;
use slirc_lite_proto::{Message, NickExt, Response};
use tracing::{debug, info, warn};

/// Handler for NICK command.
///
/// The whole parameter blob must be a valid nickname. Setting the same
/// nickname again is a silent no-op.
pub struct NickHandler;

#[async_trait]
impl Handler for NickHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let requested = msg.params.as_str();
        let client = ctx.client;
        let nicknames = &ctx.matrix.nicknames;

        if requested.is_empty() {
            return ctx
                .send_reply(Response::ERR_NONICKNAMEGIVEN, "* :No nickname given")
                .await;
        }

        if !requested.is_valid_nick() {
            return ctx
                .send_reply(Response::ERR_ERRONEUSNICKNAME, "* :Erroneous nickname")
                .await;
        }

        let Some(current) = client.nickname() else {
            if nicknames.claim(requested, client).is_err() {
                return ctx
                    .send_reply(Response::ERR_NICKNAMEINUSE, "* :Nickname is already in use")
                    .await;
            }
            client.set_nickname(requested.to_string());
            debug!(nick = %requested, client = %client.id, "Nick set");
            return Ok(());
        };

        if current == requested {
            return Ok(());
        }

        match nicknames.rename(&current, requested, client) {
            Ok(()) => {}
            Err(ClaimError::AlreadyClaimed(_)) => {
                return ctx
                    .send_reply(
                        Response::ERR_NICKNAMEINUSE,
                        format!("{requested} :Nickname is already in use"),
                    )
                    .await;
            }
            Err(e @ ClaimError::NotFound(_)) => {
                warn!(nick = %current, client = %client.id, error = %e, "Nickname registry out of step");
                return Ok(());
            }
        }

        // Prefix carries the old nickname.
        let line = relay(client, "NICK", requested);
        client.set_nickname(requested.to_string());

        for room in ctx.state.rooms() {
            room.broadcast_to_all(&line);
        }

        info!(old = %current, new = %requested, client = %client.id, "Nick changed");
        Ok(())
    }
}
