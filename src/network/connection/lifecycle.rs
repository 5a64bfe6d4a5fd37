//! Session teardown.
//!
//! Runs once per connection, whatever ended it: QUIT, a read failure, a
//! malformed line or a SendQ overflow.

use crate::error::ClaimError;
use crate::handlers::relay;
use crate::state::{Client, Matrix, SessionState};
use tracing::{debug, info, warn};

/// Release everything `client` holds.
///
/// The nickname and username claims are dropped and every membership is
/// removed on both sides. Co-members of the rooms left then get a QUIT
/// notice, unless QUIT already sent one.
pub(super) fn teardown(client: &Client, matrix: &Matrix, state: &mut SessionState, reason: &str) {
    let profile = client.profile();
    if let Some(nick) = profile.nickname.as_deref() {
        release(matrix.nicknames.release(nick, client), matrix.nicknames.kind());
    }
    if let Some(user) = profile.username.as_deref() {
        release(matrix.usernames.release(user, client), matrix.usernames.kind());
    }

    let left = state.leave_all(client);

    if !state.quit_announced && !left.is_empty() {
        let quit = relay(client, "QUIT", format!(":{reason}"));
        for room in &left {
            room.broadcast_to_all(&quit);
        }
    }

    info!(
        client = %client.id,
        addr = %client.address,
        nick = profile.nickname.as_deref(),
        rooms = left.len(),
        %reason,
        "Client disconnected"
    );
}

fn release(result: Result<(), ClaimError>, kind: &str) {
    match result {
        Ok(()) => {}
        Err(ClaimError::NotFound(id)) => debug!(%kind, %id, "Identity already released"),
        Err(e) => warn!(%kind, error = %e, "Unexpected release failure"),
    }
}
