//! Helper functions for IRC command handlers.
//!
//! Reply builders shared by more than one handler, and the relay line
//! constructor.

use crate::state::Client;
use slirc_lite_proto::{Message, Response};
use std::sync::Arc;

// ============================================================================
// Common reply helpers
// ============================================================================

/// Helper to create a server reply message (numeric response).
pub fn server_reply(server_name: &str, response: Response, params: impl Into<String>) -> Message {
    Message::numeric(server_name, response, params)
}

/// Create ERR_NEEDMOREPARAMS reply (461) - not enough parameters.
pub fn err_needmoreparams(server_name: &str, nick: &str, command: &str) -> Message {
    server_reply(
        server_name,
        Response::ERR_NEEDMOREPARAMS,
        format!("{nick} {command} :Not enough parameters"),
    )
}

/// Create ERR_NOSUCHNICK reply (401) - no such nick/channel.
pub fn err_nosuchnick(server_name: &str, nick: &str, target: &str) -> Message {
    server_reply(
        server_name,
        Response::ERR_NOSUCHNICK,
        format!("{nick} {target} :No such nick/channel"),
    )
}

/// Create ERR_NOSUCHCHANNEL reply (403) - no such channel.
pub fn err_nosuchchannel(server_name: &str, nick: &str, channel: &str) -> Message {
    server_reply(
        server_name,
        Response::ERR_NOSUCHCHANNEL,
        format!("{nick} {channel} :No such channel"),
    )
}

/// Create ERR_NOTONCHANNEL reply (442) - not on that channel.
pub fn err_notonchannel(server_name: &str, nick: &str, channel: &str) -> Message {
    server_reply(
        server_name,
        Response::ERR_NOTONCHANNEL,
        format!("{nick} {channel} :You're not on that channel"),
    )
}

/// Create ERR_UNKNOWNCOMMAND reply (421) - unknown command.
pub fn err_unknowncommand(server_name: &str, nick: &str, command: &str) -> Message {
    server_reply(
        server_name,
        Response::ERR_UNKNOWNCOMMAND,
        format!("{nick} {command} :Unknown command"),
    )
}

// ============================================================================
// Relay
// ============================================================================

/// A line sent on behalf of `source`, prefixed `nick!user@address`.
pub fn relay(source: &Client, command: &str, params: impl Into<String>) -> Arc<Message> {
    Arc::new(Message::new(command, params).with_prefix(source.prefix()))
}

/// Split at the first run of ASCII whitespace: `(word, rest)`.
///
/// `rest` is `None` when there is no whitespace at all, otherwise the text
/// after the whitespace run (possibly empty).
pub(crate) fn split_word(s: &str) -> (&str, Option<&str>) {
    match s.find(|c: char| c.is_ascii_whitespace()) {
        Some(end) => (
            &s[..end],
            Some(s[end..].trim_start_matches(|c: char| c.is_ascii_whitespace())),
        ),
        None => (s, None),
    }
}
