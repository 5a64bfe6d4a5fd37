//! Connection-private session state.
//!
//! Only the connection task touches a [`SessionState`]. It records where
//! the client is in registration and which rooms it has joined; the room
//! side of each membership lives in [`Chatroom`].

use std::collections::BTreeMap;
use std::sync::Arc;

use super::channel::Chatroom;
use super::client::Client;

/// Registration progress.
///
/// ```text
/// Unregistered ──(nick and user both set)──▶ Registered
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Registration {
    #[default]
    Unregistered,
    Registered,
}

impl Registration {
    /// The single transition. Returns true exactly once: on the call that
    /// first sees both a nickname and a username.
    pub fn advance(&mut self, has_nick: bool, has_user: bool) -> bool {
        match self {
            Registration::Unregistered if has_nick && has_user => {
                *self = Registration::Registered;
                true
            }
            _ => false,
        }
    }

    pub fn is_registered(self) -> bool {
        self == Registration::Registered
    }
}

/// Per-connection state owned by the read loop.
#[derive(Debug, Default)]
pub struct SessionState {
    pub registration: Registration,
    rooms: BTreeMap<String, Arc<Chatroom>>,
    /// Set once QUIT has broadcast its own notice.
    pub quit_announced: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_registered()
    }

    pub fn room(&self, name: &str) -> Option<&Arc<Chatroom>> {
        self.rooms.get(name)
    }

    pub fn is_in(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Joined rooms, in name order.
    pub fn rooms(&self) -> impl Iterator<Item = &Arc<Chatroom>> {
        self.rooms.values()
    }

    /// Record membership on both sides. Returns false if already joined.
    pub fn join(&mut self, room: Arc<Chatroom>, client: &Arc<Client>) -> bool {
        if self.rooms.contains_key(&room.name) {
            return false;
        }
        room.add_member(Arc::clone(client));
        self.rooms.insert(room.name.clone(), room);
        true
    }

    /// Remove membership on both sides.
    pub fn leave(&mut self, name: &str, client: &Client) -> Option<Arc<Chatroom>> {
        let room = self.rooms.remove(name)?;
        room.remove_member(client.id);
        Some(room)
    }

    /// Leave every room, returning them.
    pub fn leave_all(&mut self, client: &Client) -> Vec<Arc<Chatroom>> {
        let rooms = std::mem::take(&mut self.rooms);
        rooms
            .into_values()
            .inspect(|room| {
                room.remove_member(client.id);
            })
            .collect()
    }
}
