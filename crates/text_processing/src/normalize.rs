//! Whitespace normalization

/// Collapse whitespace runs to a single space and trim the ends.
///
/// Case is preserved so generated messages can echo the user's text;
/// extractors lowercase on their own.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
