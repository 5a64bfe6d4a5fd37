//! Command handler registry and dispatch.

use super::context::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{
    channel::{JoinHandler, PartHandler},
    connection::{NickHandler, QuitHandler, UserHandler},
    helpers::err_unknowncommand,
    messaging::PrivmsgHandler,
    user_query::WhoHandler,
};
use slirc_lite_proto::Message;
use std::collections::HashMap;
use tracing::{debug, span, Instrument, Level};

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Connection/registration handlers
        handlers.insert("NICK", Box::new(NickHandler));
        handlers.insert("USER", Box::new(UserHandler));
        handlers.insert("QUIT", Box::new(QuitHandler));

        // Channel handlers
        handlers.insert("JOIN", Box::new(JoinHandler));
        handlers.insert("PART", Box::new(PartHandler));

        // Messaging handlers
        handlers.insert("PRIVMSG", Box::new(PrivmsgHandler));

        // User query handlers
        handlers.insert("WHO", Box::new(WhoHandler));

        Self { handlers }
    }

    /// Dispatch a message to the appropriate handler.
    ///
    /// The command token is matched case-insensitively. Unknown commands
    /// answer 421 and succeed.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult {
        let cmd_name = msg.command.to_ascii_uppercase();

        let Some(handler) = self.handlers.get(cmd_name.as_str()) else {
            let nick = ctx.nick_or_star();
            let reply = err_unknowncommand(ctx.server_name(), &nick, &cmd_name);
            ctx.send(reply).await?;
            return Ok(());
        };

        if handler.requires_registration() && !ctx.state.is_registered() {
            return Err(HandlerError::NotRegistered);
        }

        let irc_span = span!(
            Level::DEBUG,
            "irc.command",
            command = %cmd_name,
            client = %ctx.client.id,
            source_nick = ctx.client.nickname().as_deref(),
            remote_addr = %ctx.client.address,
        );

        let result = handler.handle(ctx, msg).instrument(irc_span).await;

        if let Err(ref e) = result {
            debug!(command = %cmd_name, error = %e, "Command error");
        }

        result
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
