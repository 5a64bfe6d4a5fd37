use std::str::FromStr;

use crate::error::MessageParseError;
use crate::nick::{is_nick_char, is_nick_first_char};

/// Origin of a message.
///
/// Server-originated lines carry a [`Prefix::ServerName`]; relayed lines
/// carry the sender's `nick!user@host` as a [`Prefix::Nickname`]. Either of
/// the user or host parts may be empty.
///
/// The wire form only tells the two apart by a `.` in the name, so a
/// server name must contain one and a nickname must not. Server names come
/// from `server.name`, which config validation holds to that rule.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Prefix {
    /// Server name (e.g., "irc.local"); always contains a `.`
    ServerName(String),
    /// User prefix: (nickname, username, hostname)
    Nickname(String, String, String),
}

impl Prefix {
    /// Create a user prefix from its components.
    ///
    /// ```
    /// use slirc_lite_proto::Prefix;
    ///
    /// let prefix = Prefix::new("alice", "al", "127.0.0.1:4000");
    /// assert_eq!(prefix.to_string(), "alice!al@127.0.0.1:4000");
    /// ```
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix::Nickname(nick.into(), user.into(), host.into())
    }

    /// Parse a prefix (without its leading `:`).
    ///
    /// The name is a run of nickname characters, which may start with a
    /// digit. A name containing `.` with no user or host is a server name.
    /// The user and host parts are each optional, but never empty.
    pub fn parse(s: &str) -> Result<Self, MessageParseError> {
        let invalid = || MessageParseError::InvalidPrefix(s.to_owned());

        let (head, host) = match s.split_once('@') {
            Some((head, host)) => (head, Some(host)),
            None => (s, None),
        };
        let (name, user) = match head.split_once('!') {
            Some((name, user)) => (name, Some(user)),
            None => (head, None),
        };

        if matches!(host, Some(h) if h.is_empty() || h.contains(' ')) {
            return Err(invalid());
        }
        if matches!(user, Some(u) if u.is_empty() || u.contains(' ')) {
            return Err(invalid());
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(c) if is_nick_first_char(c) || c.is_ascii_digit() => {}
            _ => return Err(invalid()),
        }

        let mut dotted = false;
        for c in chars {
            if c == '.' {
                dotted = true;
            } else if !is_nick_char(c) {
                return Err(invalid());
            }
        }

        match (dotted, user, host) {
            (true, None, None) => Ok(Prefix::ServerName(name.to_owned())),
            (true, _, _) => Err(invalid()),
            (false, user, host) => Ok(Prefix::Nickname(
                name.to_owned(),
                user.unwrap_or_default().to_owned(),
                host.unwrap_or_default().to_owned(),
            )),
        }
    }

    /// Get the nickname if this is a user prefix.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Prefix::Nickname(nick, _, _) if !nick.is_empty() => Some(nick),
            _ => None,
        }
    }

    /// Get the username if this is a user prefix.
    pub fn user(&self) -> Option<&str> {
        match self {
            Prefix::Nickname(_, user, _) if !user.is_empty() => Some(user),
            _ => None,
        }
    }

    /// Get the hostname.
    pub fn host(&self) -> Option<&str> {
        match self {
            Prefix::ServerName(name) => Some(name),
            Prefix::Nickname(_, _, host) if !host.is_empty() => Some(host),
            _ => None,
        }
    }
}

impl FromStr for Prefix {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}
