//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use std::net::{Ipv4Addr, SocketAddr};

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_server_name() -> String {
    "irc.local".to_string()
}

pub fn default_server_version() -> String {
    "1.0".to_string()
}

// =============================================================================
// Listener Defaults
// =============================================================================

pub const DEFAULT_PORT: u16 = 6667;

pub fn default_listen_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

// =============================================================================
// Limit Defaults
// =============================================================================

pub fn default_max_line_length() -> usize {
    slirc_lite_proto::MAX_LINE_LEN
}

pub fn default_send_queue() -> usize {
    256
}

pub fn default_send_timeout_ms() -> u64 {
    5_000
}

pub fn default_close_grace_ms() -> u64 {
    2_000
}
