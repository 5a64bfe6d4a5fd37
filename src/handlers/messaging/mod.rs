//! Messaging command handlers.
//!
//! PRIVMSG to a room fans out to the other members; PRIVMSG to a nickname
//! goes straight to that client whether or not they share a room.

mod privmsg;

pub use privmsg::PrivmsgHandler;
