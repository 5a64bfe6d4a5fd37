//! The shared half of a connection.
//!
//! A [`Client`] is what other sessions see of a connection: its id, its
//! address, its identity profile and a handle to its outbound queue. The
//! registries and rooms hold `Arc<Client>`; the connection task that owns
//! the socket is the only writer of the profile.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use slirc_lite_proto::{Message, Prefix};
use tokio::sync::{mpsc, Notify};
use tracing::warn;

use super::uid::ClientId;
use crate::error::SendError;

/// Item on a client's outbound queue.
#[derive(Debug, Clone)]
pub enum Outbound {
    /// A line to write.
    Line(Arc<Message>),
    /// Flush what is queued and close the socket.
    Close,
}

/// Identity fields set by NICK and USER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub mode: Option<String>,
    pub realname: Option<String>,
}

/// Peer-visible handle on one connection.
#[derive(Debug)]
pub struct Client {
    pub id: ClientId,
    /// Remote `ip:port`.
    pub address: String,
    profile: RwLock<Profile>,
    outbox: mpsc::Sender<Outbound>,
    disconnect: Notify,
    disconnect_reason: Mutex<Option<String>>,
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Client {}

impl Client {
    /// Create a client and the receiving end of its outbound queue.
    pub fn new(
        id: ClientId,
        address: impl Into<String>,
        queue_len: usize,
    ) -> (Arc<Self>, mpsc::Receiver<Outbound>) {
        let (outbox, rx) = mpsc::channel(queue_len.max(1));
        let client = Arc::new(Self {
            id,
            address: address.into(),
            profile: RwLock::new(Profile::default()),
            outbox,
            disconnect: Notify::new(),
            disconnect_reason: Mutex::new(None),
        });
        (client, rx)
    }

    /// Snapshot of the current profile.
    pub fn profile(&self) -> Profile {
        self.profile.read().clone()
    }

    pub fn nickname(&self) -> Option<String> {
        self.profile.read().nickname.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.profile.read().username.clone()
    }

    /// The nickname, or `*` before one is set.
    pub fn nick_or_star(&self) -> String {
        self.nickname().unwrap_or_else(|| "*".to_string())
    }

    pub fn set_nickname(&self, nickname: String) {
        self.profile.write().nickname = Some(nickname);
    }

    pub fn set_user(&self, username: String, mode: String, realname: String) {
        let mut profile = self.profile.write();
        profile.username = Some(username);
        profile.mode = Some(mode);
        profile.realname = Some(realname);
    }

    /// `nick!user@address`, used to prefix relayed lines.
    pub fn prefix(&self) -> Prefix {
        let profile = self.profile.read();
        Prefix::new(
            profile.nickname.as_deref().unwrap_or("*"),
            profile.username.as_deref().unwrap_or_default(),
            self.address.as_str(),
        )
    }

    /// Queue a line without waiting.
    ///
    /// Used for everything a client receives from other sessions. A full
    /// queue marks this client for disconnection; a closed one means it is
    /// already going away.
    pub fn deliver(&self, msg: Arc<Message>) {
        match self.outbox.try_send(Outbound::Line(msg)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(client = %self.id, addr = %self.address, "SendQ exceeded");
                self.request_disconnect("SendQ exceeded");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {}
        }
    }

    /// Queue a line, waiting up to `timeout` for space.
    ///
    /// Used for replies to the client's own commands.
    pub async fn send(&self, msg: Message, timeout: Duration) -> Result<(), SendError> {
        self.enqueue(Outbound::Line(Arc::new(msg)), timeout).await
    }

    /// Ask the writer to flush and close the socket.
    pub async fn close(&self, timeout: Duration) -> Result<(), SendError> {
        self.enqueue(Outbound::Close, timeout).await
    }

    async fn enqueue(&self, item: Outbound, timeout: Duration) -> Result<(), SendError> {
        match tokio::time::timeout(timeout, self.outbox.send(item)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err(SendError::Closed),
            Err(_elapsed) => {
                warn!(
                    client = %self.id,
                    addr = %self.address,
                    "SendQ overflow: client not reading (timeout after {:?})",
                    timeout
                );
                Err(SendError::QueueFull)
            }
        }
    }

    /// Mark this client for disconnection. The first reason wins.
    pub fn request_disconnect(&self, reason: &str) {
        let mut slot = self.disconnect_reason.lock();
        if slot.is_none() {
            *slot = Some(reason.to_string());
            self.disconnect.notify_one();
        }
    }

    /// Resolves once [`Client::request_disconnect`] has been called.
    pub async fn disconnect_requested(&self) -> String {
        self.disconnect.notified().await;
        self.disconnect_reason
            .lock()
            .clone()
            .unwrap_or_else(|| "Disconnected".to_string())
    }
}
