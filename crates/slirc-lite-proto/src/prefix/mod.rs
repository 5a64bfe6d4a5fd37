//! Message prefix: where a line came from.

mod serialize;
mod types;

pub use self::types::Prefix;
