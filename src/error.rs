//! Error types shared by the state layer and the command handlers.

use crate::handlers::err_needmoreparams;
use slirc_lite_proto::{Message, Response};
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
///
/// Most rejected commands answer with their numeric directly and return
/// `Ok(())`. The variants here are the ones the dispatcher turns into
/// replies, or the ones that end the session.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("not registered")]
    NotRegistered,

    #[error("send error: {0}")]
    Send(#[from] SendError),

    #[error("client quit: {0}")]
    Quit(String),
}

impl HandlerError {
    /// Convert to an IRC error reply message.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply.
    pub fn to_irc_reply(&self, server_name: &str, nick: &str, cmd_name: &str) -> Option<Message> {
        match self {
            Self::NotRegistered => Some(Message::numeric(
                server_name,
                Response::ERR_NOTREGISTERED,
                format!("{nick} :You have not registered"),
            )),
            Self::NeedMoreParams => Some(err_needmoreparams(server_name, nick, cmd_name)),
            Self::Send(_) | Self::Quit(_) => None,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Delivery Errors (outbound queues)
// ============================================================================

/// Failure to queue a line for a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The writer side of the connection is gone.
    #[error("connection closed")]
    Closed,

    /// The client stopped reading and its queue stayed full.
    #[error("SendQ exceeded")]
    QueueFull,
}

// ============================================================================
// Registry Errors (identity claims)
// ============================================================================

/// Identity registry failures. Ordinary control flow, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("identity already claimed: {0}")]
    AlreadyClaimed(String),

    #[error("identity not held: {0}")]
    NotFound(String),
}
