//! Chatroom membership and broadcast.
//!
//! Each room guards its member set with its own lock. Broadcasts take a
//! snapshot under the read lock and deliver after releasing it, so a slow
//! or departing member never holds up JOIN/PART on the same room.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use slirc_lite_proto::Message;

use super::client::Client;
use super::uid::ClientId;

/// A named multicast group.
#[derive(Debug)]
pub struct Chatroom {
    pub name: String,
    members: RwLock<BTreeMap<ClientId, Arc<Client>>>,
}

impl Chatroom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: RwLock::new(BTreeMap::new()),
        }
    }

    /// Add a member. Returns false if already present.
    pub fn add_member(&self, client: Arc<Client>) -> bool {
        let mut members = self.members.write();
        if members.contains_key(&client.id) {
            return false;
        }
        members.insert(client.id, client);
        true
    }

    /// Remove a member. Returns false if it was not present.
    pub fn remove_member(&self, id: ClientId) -> bool {
        self.members.write().remove(&id).is_some()
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.members.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    /// Point-in-time copy of the member list, ordered by client id.
    pub fn members(&self) -> Vec<Arc<Client>> {
        self.members.read().values().cloned().collect()
    }

    /// Space separated nicknames for the NAMES reply.
    pub fn member_nicknames(&self) -> String {
        self.members()
            .iter()
            .filter_map(|member| member.nickname())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Deliver to every member, sender included.
    pub fn broadcast_to_all(&self, msg: &Arc<Message>) {
        for member in self.members() {
            member.deliver(Arc::clone(msg));
        }
    }

    /// Deliver to every member except `sender`.
    pub fn broadcast_except(&self, sender: ClientId, msg: &Arc<Message>) {
        for member in self.members() {
            if member.id != sender {
                member.deliver(Arc::clone(msg));
            }
        }
    }
}
