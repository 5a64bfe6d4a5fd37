//! The Matrix - Central shared state for the relay.
//!
//! Built once at startup (or once per test) and handed to every
//! connection as an `Arc`. Holds the two identity registries, the
//! chatroom directory and this server's identity.

use chrono::{DateTime, Utc};

use crate::config::{Config, LimitsConfig};
use crate::state::managers::{ChatroomDirectory, IdentityRegistry};
use crate::state::ClientIdGenerator;

/// The Matrix - Central shared state container.
pub struct Matrix {
    /// Nickname → client.
    pub nicknames: IdentityRegistry,

    /// Username → client.
    pub usernames: IdentityRegistry,

    /// Room name → room.
    pub rooms: ChatroomDirectory,

    /// This server's identity.
    pub server_info: ServerInfo,

    /// Id generator for new connections.
    pub client_ids: ClientIdGenerator,

    /// Per-connection limits.
    pub limits: LimitsConfig,
}

/// This server's identity information.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub created: DateTime<Utc>,
}

impl ServerInfo {
    /// Creation date as shown in 003, e.g. `Mar 04 2024`.
    pub fn created_display(&self) -> String {
        self.created.format("%b %d %Y").to_string()
    }
}

impl Matrix {
    pub fn new(config: &Config) -> Self {
        Self {
            nicknames: IdentityRegistry::new("nickname"),
            usernames: IdentityRegistry::new("username"),
            rooms: ChatroomDirectory::new(),
            server_info: ServerInfo {
                name: config.server.name.clone(),
                version: config.server.version.clone(),
                created: Utc::now(),
            },
            client_ids: ClientIdGenerator::new(),
            limits: config.limits.clone(),
        }
    }
}
