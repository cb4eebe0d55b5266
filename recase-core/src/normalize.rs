//! Input normalization ahead of case conversion
//!
//! Every case converter starts from the same normalized form: non-word
//! punctuation stripped, hyphen/underscore runs collapsed to single spaces.
//! Whitespace runs are deliberately left uncollapsed here; callers that care
//! about token boundaries split on whitespace runs afterwards.

/// Strip punctuation and collapse delimiter runs.
///
/// Keeps ASCII letters, digits, underscores, hyphens, and whitespace, then
/// replaces every maximal run of hyphens/underscores with a single space.
///
/// Normalization is idempotent: the output contains no hyphens or
/// underscores, so a second pass returns it unchanged.
///
/// # Example
/// ```
/// use recase_core::normalize::normalize;
///
/// assert_eq!(normalize("Hello_World 123_test"), "Hello World 123 test");
/// assert_eq!(normalize("so--many---dashes"), "so many dashes");
/// ```
pub fn normalize(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
            stripped.push(c);
        }
    }

    let mut out = String::with_capacity(stripped.len());
    let mut in_delimiter_run = false;
    for c in stripped.chars() {
        if c == '-' || c == '_' {
            if !in_delimiter_run {
                out.push(' ');
            }
            in_delimiter_run = true;
        } else {
            in_delimiter_run = false;
            out.push(c);
        }
    }
    out
}

/// Split normalized text into tokens.
///
/// Trims the ends and splits on whitespace runs, skipping the empty tokens
/// that consecutive spaces would otherwise produce.
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
