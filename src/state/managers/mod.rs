//! Domain managers for server state.
//!
//! Each manager owns one server-wide map: the identity registries (one
//! instance for nicknames, one for usernames) and the chatroom directory.

pub mod channel;
pub mod identity;

pub use channel::ChatroomDirectory;
pub use identity::IdentityRegistry;
