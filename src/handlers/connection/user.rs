//! USER handler.

use super::super::{Context, Handler, HandlerError, HandlerResult};
use crate::handlers::helpers::split_word;
use async_trait::async_trait;
use slirc_lite_proto::{Message, Response};
use tracing::debug;

/// Handler for USER command: `<username> <mode> <unused> :<realname>`.
pub struct UserHandler;

/// Fields of a well-formed USER parameter blob.
#[derive(Debug, PartialEq, Eq)]
struct UserParams<'a> {
    username: &'a str,
    mode: &'a str,
    realname: &'a str,
}

fn parse_user_params(params: &str) -> Option<UserParams<'_>> {
    let (username, rest) = split_word(params);
    if username.is_empty() || username.contains(['\0', '\r', '\n', '@']) {
        return None;
    }

    let (mode, rest) = split_word(rest?);
    if mode.is_empty() || !mode.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (unused, rest) = split_word(rest?);
    if unused.is_empty() {
        return None;
    }

    let realname = rest?.strip_prefix(':')?;
    if realname.is_empty() {
        return None;
    }

    Some(UserParams {
        username,
        mode,
        realname,
    })
}

#[async_trait]
impl Handler for UserHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let Some(params) = parse_user_params(&msg.params) else {
            return Err(HandlerError::NeedMoreParams);
        };

        let client = ctx.client;
        if client.username().is_some()
            || ctx.matrix.usernames.claim(params.username, client).is_err()
        {
            let nick = ctx.nick_or_star();
            return ctx
                .send_reply(
                    Response::ERR_ALREADYREGISTRED,
                    format!("{nick} :Unauthorized command (already registered)"),
                )
                .await;
        }

        client.set_user(
            params.username.to_string(),
            params.mode.to_string(),
            params.realname.to_string(),
        );
        debug!(user = %params.username, client = %client.id, "User set");
        Ok(())
    }
}
