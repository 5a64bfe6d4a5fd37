use std::fmt;

use super::types::Message;

impl fmt::Display for Message {
    /// `[:prefix ]COMMAND[ params]\r\n`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        f.write_str(&self.command)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        f.write_str("\r\n")
    }
}
