//! Per-connection limits.

use super::defaults::{
    default_close_grace_ms, default_max_line_length, default_send_queue, default_send_timeout_ms,
};
use serde::Deserialize;
use std::time::Duration;

/// Per-connection limits.
///
/// A client whose outbound queue fills up is disconnected with
/// "SendQ exceeded" rather than slowing the senders down.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted input line in bytes, CRLF included (default: 512).
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Outbound lines buffered per client (default: 256).
    #[serde(default = "default_send_queue")]
    pub send_queue: usize,
    /// How long a client's own replies may wait for queue space (default: 5000).
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
    /// How long teardown waits for queued lines to flush (default: 2000).
    #[serde(default = "default_close_grace_ms")]
    pub close_grace_ms: u64,
}

impl LimitsConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    pub fn close_grace(&self) -> Duration {
        Duration::from_millis(self.close_grace_ms)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            send_queue: default_send_queue(),
            send_timeout_ms: default_send_timeout_ms(),
            close_grace_ms: default_close_grace_ms(),
        }
    }
}
