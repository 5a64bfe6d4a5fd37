//! Classification of read-side failures.

use slirc_lite_proto::ProtocolError;

/// What the read loop does with a failed read.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum ReadErrorAction {
    /// Bytes on the wire that are not a line of text. Ends the session.
    FatalProtocolError { reason: String },
    /// The socket itself failed. Ends the session.
    IoError { reason: String },
}

impl ReadErrorAction {
    /// Teardown reason, also used as the QUIT text seen by co-members.
    pub(super) fn reason(&self) -> &str {
        match self {
            Self::FatalProtocolError { reason } | Self::IoError { reason } => reason,
        }
    }
}

pub(super) fn classify_read_error(e: &ProtocolError) -> ReadErrorAction {
    match e {
        ProtocolError::InvalidUtf8 { .. } => ReadErrorAction::FatalProtocolError {
            reason: "Invalid UTF-8".to_string(),
        },
        ProtocolError::Io(io) => ReadErrorAction::IoError {
            reason: format!("Read error: {io}"),
        },
        other => ReadErrorAction::IoError {
            reason: format!("Read error: {other}"),
        },
    }
}
