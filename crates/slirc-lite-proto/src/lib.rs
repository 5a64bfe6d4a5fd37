//! # slirc-lite-proto
//!
//! Protocol layer of the slircd-lite relay: the line parser, the nickname
//! and channel grammars, wildcard masks, numeric codes and a line codec for
//! `tokio_util`.
//!
//! Nothing in this crate touches server state. Parsing a line does not
//! validate identities; that is left to the command handlers.
//!
//! ```rust
//! use slirc_lite_proto::{Message, Prefix};
//!
//! let msg: Message = ":alice!al@127.0.0.1:4000 PRIVMSG #rust :hi\r\n".parse().unwrap();
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.params, "#rust :hi");
//! assert_eq!(msg.prefix, Some(Prefix::new("alice", "al", "127.0.0.1:4000")));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod mask;
pub mod message;
pub mod nick;
pub mod prefix;
pub mod response;

pub use self::chan::{parse_channel_list, ChannelExt, MAX_CHANNEL_LEN};
pub use self::error::{MessageParseError, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::line::{DecodedLine, LineCodec};
pub use self::mask::wildcard_match;
pub use self::message::Message;
pub use self::nick::{is_nick_first_char, is_nick_char, NickExt, NICK_MAX_LEN};
pub use self::prefix::Prefix;
pub use self::response::Response;

/// Maximum line length, in bytes, including the trailing CRLF.
pub const MAX_LINE_LEN: usize = 512;
