//! IRC command handlers.
//!
//! This module contains the Handler trait and command registry for dispatching
//! incoming IRC messages to appropriate handlers.
//!
//! Handlers receive the whole parameter blob of a line and apply their own
//! grammar to it. A rejected command answers with exactly one numeric.

mod channel;
mod connection;
mod core;
mod helpers;
mod messaging;
mod user_query;

pub use self::core::context::{Context, Handler};
pub use self::core::registry::Registry;
pub use crate::error::{HandlerError, HandlerResult};

pub use channel::{JoinHandler, PartHandler};
pub use connection::{send_welcome_burst, NickHandler, QuitHandler, UserHandler};
pub use helpers::{
    err_needmoreparams, err_nosuchchannel, err_nosuchnick, err_notonchannel, err_unknowncommand,
    relay, server_reply,
};
pub use messaging::PrivmsgHandler;
pub use user_query::WhoHandler;
