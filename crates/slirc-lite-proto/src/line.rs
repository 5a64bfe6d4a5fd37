//! Line codec for tokio.
//!
//! Frames a byte stream into LF-terminated lines (a CR before the LF is
//! stripped). Lines over the length limit are discarded up to their
//! terminator and reported as [`DecodedLine::TooLong`], after which
//! decoding continues with the next line.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error;

/// One item produced by [`LineCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    /// A complete line, terminator removed.
    Line(String),
    /// A line longer than the limit was dropped.
    TooLong {
        /// Maximum allowed length, terminator included.
        limit: usize,
    },
}

/// Line codec limited to `max_len` bytes per line, terminator included.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Set while skipping the rest of an oversized line
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the standard 512 byte limit.
    pub fn new() -> Self {
        Self::with_max_len(crate::MAX_LINE_LEN)
    }

    /// Create a codec with a custom limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }

    /// Maximum accepted line length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = DecodedLine;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<DecodedLine>> {
        let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
            if self.discarding || src.len() > self.max_len {
                self.discarding = true;
                src.clear();
                self.next_index = 0;
            } else {
                self.next_index = src.len();
            }
            return Ok(None);
        };

        let line = src.split_to(self.next_index + offset + 1);
        self.next_index = 0;

        if std::mem::take(&mut self.discarding) || line.len() > self.max_len {
            return Ok(Some(DecodedLine::TooLong {
                limit: self.max_len,
            }));
        }

        let mut end = line.len() - 1;
        if end > 0 && line[end - 1] == b'\r' {
            end -= 1;
        }

        let text = std::str::from_utf8(&line[..end]).map_err(|e| {
            error::ProtocolError::InvalidUtf8 {
                byte_pos: e.valid_up_to(),
            }
        })?;

        Ok(Some(DecodedLine::Line(text.to_owned())))
    }

    /// An unterminated tail at EOF is dropped.
    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<DecodedLine>> {
        match self.decode(src)? {
            Some(frame) => Ok(Some(frame)),
            None => {
                src.clear();
                self.next_index = 0;
                Ok(None)
            }
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> error::Result<()> {
        dst.extend_from_slice(msg.as_bytes());
        Ok(())
    }
}
