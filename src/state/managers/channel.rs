//! Chatroom directory.
//!
//! Rooms are created on first JOIN and kept for the life of the process,
//! so a lookup never races with removal of an emptied room.

use std::sync::Arc;

use dashmap::DashMap;

use crate::state::channel::Chatroom;

/// All rooms, indexed by exact name.
pub struct ChatroomDirectory {
    rooms: DashMap<String, Arc<Chatroom>>,
}

impl ChatroomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Get an existing room or create it. Concurrent first joiners all get
    /// the same room.
    pub fn get_or_create(&self, name: &str) -> Arc<Chatroom> {
        if let Some(room) = self.rooms.get(name) {
            return Arc::clone(room.value());
        }
        let room = self
            .rooms
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(room = %name, "Created room");
                Arc::new(Chatroom::new(name))
            });
        Arc::clone(room.value())
    }

    /// Look up a room without creating it.
    pub fn get(&self, name: &str) -> Option<Arc<Chatroom>> {
        self.rooms.get(name).map(|room| Arc::clone(room.value()))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for ChatroomDirectory {
    fn default() -> Self {
        Self::new()
    }
}
