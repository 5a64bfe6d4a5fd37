//! Nickname grammar.
//!
//! A nickname is one to nine characters. The first is a letter or one of
//! the specials `` [ ] \ ` _ ^ { | } ``; the rest may also be digits or `-`.

/// Maximum nickname length in characters.
pub const NICK_MAX_LEN: usize = 9;

/// Extension trait for checking if a string is a valid nickname.
pub trait NickExt {
    /// Check the whole string against the nickname grammar.
    ///
    /// ```
    /// use slirc_lite_proto::NickExt;
    ///
    /// assert!("alice".is_valid_nick());
    /// assert!("[cool]".is_valid_nick());
    /// assert!(!"9lives".is_valid_nick());
    /// assert!(!"alice bob".is_valid_nick());
    /// assert!(!"abcdefghij".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;
}

#[inline]
fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

/// Characters allowed at the start of a nickname.
#[inline]
pub fn is_nick_first_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_special(c)
}

/// Characters allowed after the first one.
#[inline]
pub fn is_nick_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_special(c) || c == '-'
}

impl NickExt for str {
    fn is_valid_nick(&self) -> bool {
        let mut chars = self.chars();

        let first = match chars.next() {
            Some(c) => c,
            None => return false,
        };
        if !is_nick_first_char(first) {
            return false;
        }

        let mut len = 1;
        for c in chars {
            len += 1;
            if len > NICK_MAX_LEN || !is_nick_char(c) {
                return false;
            }
        }
        true
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }
}
