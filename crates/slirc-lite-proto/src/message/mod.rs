//! Parsed IRC lines.

mod parse;
mod serialize;
mod types;

pub use self::types::Message;
