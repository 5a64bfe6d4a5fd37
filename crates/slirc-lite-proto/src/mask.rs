//! Wildcard masks as used by WHO.
//!
//! `*` matches any run of characters (including none), `?` matches exactly
//! one character and everything else matches itself. Matching is
//! case-sensitive.

/// Match `text` against a wildcard `pattern`.
///
/// ```
/// use slirc_lite_proto::wildcard_match;
///
/// assert!(wildcard_match("al*", "alice"));
/// assert!(wildcard_match("b?b", "bob"));
/// assert!(!wildcard_match("Alice", "alice"));
/// ```
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut p = 0;
    let mut t = 0;
    // Pattern index just after the last '*', and where in text it resumed.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || (pattern[p] != '*' && pattern[p] == text[t]))
        {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p + 1, t));
            p += 1;
        } else if let Some((sp, st)) = star {
            p = sp;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}
