//! State management module.
//!
//! Contains the Matrix (shared server state), the per-connection client
//! handle and session state, and the rooms.

mod channel;
mod client;
pub mod managers;
mod matrix;
mod session;
mod uid;

pub use channel::Chatroom;
pub use client::{Client, Outbound, Profile};
pub use managers::{ChatroomDirectory, IdentityRegistry};
pub use matrix::{Matrix, ServerInfo};
pub use session::{Registration, SessionState};
pub use uid::{ClientId, ClientIdGenerator};
