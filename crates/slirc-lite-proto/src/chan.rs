//! Channel name grammar.
//!
//! A channel name is `#` followed by 1 to 49 characters, none of which is
//! NUL, BEL, CR, LF, space or comma. JOIN and PART take a comma separated
//! list of such names.

/// Maximum channel name length in characters, `#` included.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Extension trait for checking if a string is a valid channel name.
pub trait ChannelExt {
    /// Check the whole string against the channel grammar.
    fn is_channel_name(&self) -> bool;
}

#[inline]
fn is_channel_char(c: char) -> bool {
    !matches!(c, '\0' | '\x07' | '\r' | '\n' | ' ' | ',')
}

impl ChannelExt for str {
    fn is_channel_name(&self) -> bool {
        let Some(rest) = self.strip_prefix('#') else {
            return false;
        };

        let mut len = 0;
        for c in rest.chars() {
            len += 1;
            if len >= MAX_CHANNEL_LEN || !is_channel_char(c) {
                return false;
            }
        }
        len > 0
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}

/// Split a comma separated channel list, rejecting it unless every entry
/// is a valid channel name.
///
/// ```
/// use slirc_lite_proto::parse_channel_list;
///
/// assert_eq!(parse_channel_list("#a,#b"), Some(vec!["#a", "#b"]));
/// assert_eq!(parse_channel_list("#a,b"), None);
/// assert_eq!(parse_channel_list("#a,"), None);
/// ```
pub fn parse_channel_list(list: &str) -> Option<Vec<&str>> {
    list.split(',')
        .map(|name| name.is_channel_name().then_some(name))
        .collect()
}
