//! Per-line dispatch pipeline.
//!
//! Takes one decoded line through parsing, the handler registry, error
//! replies and the registration transition, and tells the read loop
//! whether to keep going.

use crate::error::HandlerError;
use crate::handlers::{send_welcome_burst, Context, Registry};
use crate::state::{Client, Matrix, SessionState};
use slirc_lite_proto::Message;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of processing a single line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading.
    Continue,
    /// The client sent QUIT with this reason; its notice is already out.
    Quit(String),
    /// End the session for this reason.
    Disconnect(String),
}

/// Process one line from `client`.
///
/// Blank lines are ignored. A line that does not parse ends the session.
pub async fn process_line(
    line: &str,
    client: &Arc<Client>,
    matrix: &Arc<Matrix>,
    registry: &Registry,
    state: &mut SessionState,
) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Continue;
    }

    let msg = match line.parse::<Message>() {
        Ok(msg) => msg,
        Err(e) => {
            warn!(client = %client.id, error = %e, raw = ?line, "Malformed message");
            return LineOutcome::Disconnect("Malformed message".to_string());
        }
    };
    debug!(client = %client.id, raw = ?line, "Received message");

    let mut ctx = Context::new(client, matrix, state);
    let result = registry.dispatch(&mut ctx, &msg).await;

    if let Err(e) = result {
        match e {
            HandlerError::Quit(reason) => return LineOutcome::Quit(reason),
            HandlerError::Send(e) => return LineOutcome::Disconnect(e.to_string()),
            HandlerError::NeedMoreParams | HandlerError::NotRegistered => {
                let command = msg.command.to_ascii_uppercase();
                let nick = client.nick_or_star();
                if let Some(reply) = e.to_irc_reply(ctx.server_name(), &nick, &command)
                    && let Err(e) = ctx.send(reply).await
                {
                    return LineOutcome::Disconnect(e.to_string());
                }
            }
        }
    }

    let profile = client.profile();
    if ctx
        .state
        .registration
        .advance(profile.nickname.is_some(), profile.username.is_some())
        && let Err(e) = send_welcome_burst(&mut ctx).await
    {
        return LineOutcome::Disconnect(e.to_string());
    }

    LineOutcome::Continue
}
