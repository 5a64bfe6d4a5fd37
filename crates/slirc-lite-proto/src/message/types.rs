use crate::prefix::Prefix;
use crate::response::Response;

/// One IRC line: optional prefix, command token and the raw parameter blob.
///
/// Parameters are kept verbatim as everything after the first space that
/// follows the command. Each command applies its own grammar to them.
///
/// ```
/// use slirc_lite_proto::{Message, Prefix, Response};
///
/// let msg = Message::numeric("irc.local", Response::ERR_NONICKNAMEGIVEN, "* :No nickname given");
/// assert_eq!(msg.to_string(), ":irc.local 431 * :No nickname given\r\n");
///
/// let relay = Message::new("JOIN", "#rust").with_prefix(Prefix::new("alice", "al", "host"));
/// assert_eq!(relay.to_string(), ":alice!al@host JOIN #rust\r\n");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// Command token exactly as received (letters or a three digit numeric).
    pub command: String,
    /// Everything after the command, without the separating space.
    pub params: String,
}

impl Message {
    /// Create an unprefixed message.
    pub fn new(command: impl Into<String>, params: impl Into<String>) -> Self {
        Message {
            prefix: None,
            command: command.into(),
            params: params.into(),
        }
    }

    /// Create a numeric reply originating from `server`.
    pub fn numeric(server: &str, response: Response, params: impl Into<String>) -> Self {
        Message {
            prefix: Some(Prefix::ServerName(server.to_owned())),
            command: response.to_string(),
            params: params.into(),
        }
    }

    /// Replace the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// The numeric code, if the command is a three digit numeric.
    pub fn response(&self) -> Option<Response> {
        self.command.parse().ok()
    }
}
