//! slircd-lite - a small IRC relay daemon.
//!
//! Registration (NICK/USER), chatrooms (JOIN/PART), direct and room
//! messages (PRIVMSG), QUIT and WHO, over plain TCP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod state;
