//! WHO handler for listing users matching a mask.

use super::super::{err_nosuchchannel, server_reply, Context, Handler, HandlerError, HandlerResult};
use crate::state::Client;
use async_trait::async_trait;
use slirc_lite_proto::{wildcard_match, Message, Response};

/// Handler for WHO command.
///
/// `WHO <mask>[ o]`
///
/// A mask starting with `#` lists the members of that room. Anything else
/// is a wildcard pattern (`*`, `?`) tested against every registered
/// nickname, username and address. The `o` flag is accepted and ignored;
/// there are no operators.
pub struct WhoHandler;

/// `<mask>` is a run of characters other than whitespace and comma,
/// optionally followed by whitespace and a lone `o`.
fn parse_who_params(params: &str) -> Option<&str> {
    let end = params
        .find(|c: char| c.is_ascii_whitespace() || c == ',')
        .unwrap_or(params.len());
    let (mask, rest) = params.split_at(end);
    if mask.is_empty() {
        return None;
    }
    if rest.is_empty() {
        return Some(mask);
    }
    let flag = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    (flag.len() < rest.len() && flag == "o").then_some(mask)
}

/// The fields of a 352 reply after `<requester> <room>`.
fn who_fields(server_name: &str, client: &Client) -> String {
    let profile = client.profile();
    format!(
        "{} {} {} {} H :0 {}",
        profile.username.as_deref().unwrap_or("*"),
        client.address,
        server_name,
        profile.nickname.as_deref().unwrap_or("*"),
        profile.realname.as_deref().unwrap_or(""),
    )
}

fn matches_mask(mask: &str, client: &Client) -> bool {
    let profile = client.profile();
    profile
        .nickname
        .as_deref()
        .is_some_and(|nick| wildcard_match(mask, nick))
        || profile
            .username
            .as_deref()
            .is_some_and(|user| wildcard_match(mask, user))
        || wildcard_match(mask, &client.address)
}

#[async_trait]
impl Handler for WhoHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let mask = parse_who_params(&msg.params).ok_or(HandlerError::NeedMoreParams)?;
        let server_name = ctx.server_name();
        let nick = ctx.nick_or_star();

        let (scope, members) = if mask.starts_with('#') {
            let Some(room) = ctx.matrix.rooms.get(mask) else {
                return ctx.send(err_nosuchchannel(server_name, &nick, mask)).await;
            };
            (mask, room.members())
        } else {
            let matching = ctx
                .matrix
                .nicknames
                .snapshot_all()
                .into_iter()
                .filter(|client| matches_mask(mask, client))
                .collect();
            ("*", matching)
        };

        for member in &members {
            ctx.send(server_reply(
                server_name,
                Response::RPL_WHOREPLY,
                format!("{nick} {scope} {}", who_fields(server_name, member)),
            ))
            .await?;
        }

        ctx.send_reply(
            Response::RPL_ENDOFWHO,
            format!("{nick} {mask} :End of WHO list"),
        )
        .await
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
