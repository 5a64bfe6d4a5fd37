//! Error types for framing and parsing.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing lines off a byte stream.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The line is not valid UTF-8.
    #[error("invalid UTF-8 in line at byte {byte_pos}")]
    InvalidUtf8 {
        /// Byte position where decoding failed.
        byte_pos: usize,
    },
}

/// Errors encountered when parsing a single line into a [`crate::Message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty.
    #[error("empty message")]
    EmptyMessage,

    /// The prefix did not match `nick[!user]@host` or a server name.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    /// The command was missing or not letters / three digits.
    #[error("invalid command")]
    InvalidCommand,

    /// A NUL, CR or LF appeared inside the line.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),
}
