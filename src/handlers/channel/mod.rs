//! Channel command handlers.
//!
//! Handles JOIN and PART.

mod join;
mod part;

pub use join::JoinHandler;
pub use part::PartHandler;
