//! Command handler context and core types.
//!
//! Defines the `Context` struct passed to all handlers and the `Handler`
//! trait they implement.

use crate::error::HandlerResult;
use crate::state::{Client, Matrix, SessionState};
use async_trait::async_trait;
use slirc_lite_proto::{Message, Response};
use std::sync::Arc;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The connection issuing the command.
    pub client: &'a Arc<Client>,
    /// Shared server state.
    pub matrix: &'a Arc<Matrix>,
    /// Connection-private state.
    pub state: &'a mut SessionState,
}

impl<'a> Context<'a> {
    pub fn new(
        client: &'a Arc<Client>,
        matrix: &'a Arc<Matrix>,
        state: &'a mut SessionState,
    ) -> Self {
        Self {
            client,
            matrix,
            state,
        }
    }

    #[inline]
    pub fn server_name(&self) -> &'a str {
        &self.matrix.server_info.name
    }

    /// The client's nickname, or `*` before one is set.
    pub fn nick_or_star(&self) -> String {
        self.client.nick_or_star()
    }

    /// Queue a reply to this client.
    ///
    /// Waits for queue space up to the configured send timeout; a client
    /// that stays full past that fails with `SendQ exceeded`.
    pub async fn send(&self, msg: Message) -> HandlerResult {
        self.client
            .send(msg, self.matrix.limits.send_timeout())
            .await?;
        Ok(())
    }

    /// Build and send a server numeric in one call.
    #[inline]
    pub async fn send_reply(&self, response: Response, params: impl Into<String>) -> HandlerResult {
        self.send(Message::numeric(self.server_name(), response, params))
            .await
    }
}

/// A command handler.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &Message) -> HandlerResult;

    /// Commands that answer 451 until the client has registered.
    fn requires_registration(&self) -> bool {
        false
    }
}
