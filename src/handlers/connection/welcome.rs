//! Welcome burst and registration completion.

use super::super::{Context, HandlerResult};
use slirc_lite_proto::Response;
use tracing::info;

/// Send the welcome burst (001-004) after registration completes.
pub async fn send_welcome_burst(ctx: &mut Context<'_>) -> HandlerResult {
    let client = ctx.client;
    let info = &ctx.matrix.server_info;
    let nick = client.nick_or_star();

    ctx.send_reply(
        Response::RPL_WELCOME,
        format!(
            "{nick} :Welcome to the Internet Relay Network {}",
            client.prefix()
        ),
    )
    .await?;
    ctx.send_reply(
        Response::RPL_YOURHOST,
        format!(
            "{nick} :Your host is {}, running version {}",
            info.name, info.version
        ),
    )
    .await?;
    ctx.send_reply(
        Response::RPL_CREATED,
        format!("{nick} :This server was created {}", info.created_display()),
    )
    .await?;
    ctx.send_reply(
        Response::RPL_MYINFO,
        format!("{nick} {} {}", info.name, info.version),
    )
    .await?;

    info!(
        nick = %nick,
        user = ?client.username(),
        addr = %client.address,
        "Client registered"
    );
    Ok(())
}
