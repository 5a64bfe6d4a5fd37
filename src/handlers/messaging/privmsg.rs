//! PRIVMSG command handler.

use super::super::{err_nosuchnick, err_notonchannel, relay, Context, Handler, HandlerResult};
use crate::handlers::helpers::split_word;
use async_trait::async_trait;
use slirc_lite_proto::{Message, Response};
use tracing::debug;

pub struct PrivmsgHandler;

/// Outcome of applying the PRIVMSG grammar.
#[derive(Debug, PartialEq, Eq)]
enum Parsed<'a> {
    Deliver { target: &'a str, text: &'a str },
    NoRecipient,
    NoText,
}

/// `<target> <ws>+:<text>`, where the target starts with `#` or a word
/// character and contains no whitespace or comma.
fn parse_privmsg_params(params: &str) -> Parsed<'_> {
    let (target, rest) = split_word(params);

    let valid_target = target
        .chars()
        .next()
        .is_some_and(|c| c == '#' || c == '_' || c.is_ascii_alphanumeric())
        && !target.contains(',');
    if !valid_target {
        return Parsed::NoRecipient;
    }

    match rest {
        None | Some("") | Some(":") => Parsed::NoText,
        Some(rest) => match rest.strip_prefix(':') {
            Some(text) => Parsed::Deliver { target, text },
            None => Parsed::NoRecipient,
        },
    }
}

#[async_trait]
impl Handler for PrivmsgHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let client = ctx.client;
        let nick = ctx.nick_or_star();

        let (target, text) = match parse_privmsg_params(&msg.params) {
            Parsed::Deliver { target, text } => (target, text),
            Parsed::NoRecipient => {
                return ctx
                    .send_reply(
                        Response::ERR_NORECIPIENT,
                        format!("{nick} :No recipient given (PRIVMSG)"),
                    )
                    .await;
            }
            Parsed::NoText => {
                return ctx
                    .send_reply(Response::ERR_NOTEXTTOSEND, format!("{nick} :No text to send"))
                    .await;
            }
        };

        if target.starts_with('#') {
            let Some(room) = ctx.state.room(target) else {
                let reply = err_notonchannel(ctx.server_name(), &nick, target);
                return ctx.send(reply).await;
            };
            room.broadcast_except(client.id, &relay(client, "PRIVMSG", format!("{target} :{text}")));
            debug!(from = %nick, room = %target, "Relayed room message");
            return Ok(());
        }

        let Some(recipient) = ctx.matrix.nicknames.lookup(target) else {
            let reply = err_nosuchnick(ctx.server_name(), &nick, target);
            return ctx.send(reply).await;
        };

        // The registry is keyed by nickname, so a hit is addressed as `target`.
        recipient.deliver(relay(client, "PRIVMSG", format!("{target} :{text}")));
        debug!(from = %nick, to = %target, "Relayed direct message");
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
