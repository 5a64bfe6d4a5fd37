//! Identity registries.
//!
//! An [`IdentityRegistry`] maps a claimed string to the client holding it
//! and enforces that no two clients hold the same string. The server keeps
//! two: nicknames and usernames. Identities compare byte for byte.
//!
//! Every operation is a single critical section on the registry's lock;
//! none of them performs I/O or takes another lock while holding it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ClaimError;
use crate::state::client::Client;

/// Uniqueness-enforcing map from identity string to owner.
pub struct IdentityRegistry {
    /// What the registry holds, for log fields ("nickname", "username").
    kind: &'static str,
    entries: RwLock<HashMap<String, Arc<Client>>>,
}

impl IdentityRegistry {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Claim `id` for `client` if nobody holds it.
    pub fn claim(&self, id: &str, client: &Arc<Client>) -> Result<(), ClaimError> {
        let mut entries = self.entries.write();
        if entries.contains_key(id) {
            return Err(ClaimError::AlreadyClaimed(id.to_string()));
        }
        entries.insert(id.to_string(), Arc::clone(client));
        Ok(())
    }

    /// Move `owner`'s claim from `old` to `new` in one step.
    ///
    /// Fails without side effects if `new` is taken or `old` is not held
    /// by `owner`.
    pub fn rename(&self, old: &str, new: &str, owner: &Client) -> Result<(), ClaimError> {
        let mut entries = self.entries.write();
        if entries.contains_key(new) {
            return Err(ClaimError::AlreadyClaimed(new.to_string()));
        }
        match entries.get(old) {
            Some(holder) if holder.id == owner.id => {}
            _ => return Err(ClaimError::NotFound(old.to_string())),
        }
        if let Some(holder) = entries.remove(old) {
            entries.insert(new.to_string(), holder);
        }
        Ok(())
    }

    /// Drop `owner`'s claim on `id`. Claims held by anyone else are left alone.
    pub fn release(&self, id: &str, owner: &Client) -> Result<(), ClaimError> {
        let mut entries = self.entries.write();
        match entries.get(id) {
            Some(holder) if holder.id == owner.id => {
                entries.remove(id);
                Ok(())
            }
            _ => Err(ClaimError::NotFound(id.to_string())),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<Arc<Client>> {
        self.entries.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Every holder, ordered by client id.
    pub fn snapshot_all(&self) -> Vec<Arc<Client>> {
        let mut clients: Vec<_> = self.entries.read().values().cloned().collect();
        clients.sort_by_key(|client| client.id);
        clients
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
