//! Casing predicates over tokens and whole strings
//!
//! The converters in [`crate::case`] decide how to transform an input by
//! first classifying what convention it already follows; these predicates
//! are that classification layer. Token-level predicates are ASCII-centric
//! because [`crate::normalize::normalize`] only emits ASCII word characters.

/// True iff the token is non-empty and contains only uppercase ASCII
/// letters and digits.
///
/// Such tokens are treated as acronyms: Pascal/Camel conversion preserves
/// their internal casing verbatim.
pub fn is_acronym(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// True iff the token's first character is an uppercase ASCII letter.
///
/// A token with no alphabetic leading character matches neither this nor
/// [`starts_lower`].
pub fn starts_upper(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// True iff the token's first character is a lowercase ASCII letter.
pub fn starts_lower(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// True iff the normalized string contains no whitespace run, i.e. it is a
/// single token.
pub fn is_single_token(normalized: &str) -> bool {
    !normalized.chars().any(char::is_whitespace)
}

/// True iff the string equals its own uppercase mapping.
///
/// Strings without cased characters (digits, punctuation, the empty string)
/// count as uppercase.
pub fn is_upper_case(input: &str) -> bool {
    input == input.to_uppercase()
}

/// True iff the string equals its own lowercase mapping.
pub fn is_lower_case(input: &str) -> bool {
    input == input.to_lowercase()
}

/// True iff every space-delimited word is either fully uppercase or has an
/// uppercase first character followed by an all-lowercase remainder.
pub fn is_title_case(input: &str) -> bool {
    input.split(' ').all(|word| {
        if is_upper_case(word) {
            return true;
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                first.to_uppercase().eq(std::iter::once(first)) && is_lower_case(chars.as_str())
            }
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_detection() {
        assert!(is_acronym("ABC"));
        assert!(is_acronym("HTTP2"));
        assert!(is_acronym("123"));
        assert!(!is_acronym("REQs"));
        assert!(!is_acronym("Abc"));
        assert!(!is_acronym(""));
    }

    #[test]
    fn leading_case() {
        assert!(starts_upper("Hello"));
        assert!(!starts_upper("hello"));
        assert!(starts_lower("hello"));
        assert!(!starts_lower("Hello"));
        // No alphabetic lead: matches neither
        assert!(!starts_upper("123abc"));
        assert!(!starts_lower("123abc"));
        assert!(!starts_upper(""));
        assert!(!starts_lower(""));
    }

    #[test]
    fn single_token_detection() {
        assert!(is_single_token("helloWorld"));
        assert!(is_single_token(""));
        assert!(!is_single_token("hello world"));
        assert!(!is_single_token(" hello"));
    }

    #[test]
    fn upper_and_lower_predicates() {
        assert!(is_upper_case("HELLO WORLD"));
        assert!(!is_upper_case("Hello World"));
        assert!(is_lower_case("hello world"));
        assert!(!is_lower_case("Hello World"));
        // Uncased characters satisfy both
        assert!(is_upper_case("123.!"));
        assert!(is_lower_case("123.!"));
        assert!(is_upper_case(""));
        assert!(is_lower_case(""));
    }

    #[test]
    fn title_case_predicate() {
        assert!(is_title_case("Hello World"));
        assert!(is_title_case("HELLO World"));
        assert!(!is_title_case("hello World"));
        assert!(!is_title_case("Hello WOrld"));
        // Consecutive spaces produce empty words, which pass
        assert!(is_title_case("Hello  World"));
    }
}
