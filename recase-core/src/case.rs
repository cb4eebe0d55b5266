//! The case-converter family
//!
//! The six converters share a detection-then-transform structure: each one
//! first classifies the casing convention the input already follows (via
//! [`crate::normalize`] and [`crate::classify`]) and only then rewrites it.
//! They also feed each other: camelCase is derived from PascalCase by
//! lowering the leading uppercase run, and snake_case is kebab-case with the
//! separator substituted.
//!
//! Tokens that look like acronyms (`"HTTP"`, `"REQ2"`) keep their internal
//! casing through Pascal/Camel conversion; the remainder of every other
//! token is likewise preserved verbatim, which is what lets an
//! already-camelCase word survive a round trip
//! (`"Assignment teamMember"` becomes `"assignmentTeamMember"`).

use crate::classify::{is_acronym, is_single_token, is_upper_case, starts_lower, starts_upper};
use crate::normalize::{normalize, split_tokens};

/// Upper-case the first character of a token, keeping the remainder verbatim.
fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(token.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Lower-case the leading run of consecutive uppercase ASCII letters.
///
/// `"REQs"` becomes `"reqs"`, `"HelloWorld"` becomes `"helloWorld"`; a token
/// with no leading uppercase letters is returned unchanged.
fn lower_leading_upper_run(token: &str) -> String {
    let run_end = token
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(token.len());
    let (run, rest) = token.split_at(run_end);
    let mut out = run.to_ascii_lowercase();
    out.push_str(rest);
    out
}

/// Convert to PascalCase.
///
/// A single token that already starts uppercase (including a pure acronym)
/// is returned unchanged; one that starts lowercase only has its first
/// character raised. Multi-token input is normalized, split, and rejoined
/// with each token capitalized, acronym tokens passing through verbatim.
///
/// # Example
/// ```
/// use recase_core::case::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// assert_eq!(to_pascal_case("Hello_World 123_test"), "HelloWorld123Test");
/// assert_eq!(to_pascal_case("ABC"), "ABC");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    let normalized = normalize(input);

    if is_single_token(&normalized) {
        if starts_upper(&normalized) {
            return normalized;
        }
        if starts_lower(&normalized) {
            return capitalize_first(&normalized);
        }
        // Digit-leading and empty single tokens take the token pass below
    }

    split_tokens(&normalized)
        .map(|token| {
            if is_acronym(token) {
                token.to_string()
            } else {
                capitalize_first(token)
            }
        })
        .collect()
}

/// Convert to camelCase.
///
/// Single tokens: an already-camelCase token is returned unchanged, a pure
/// acronym is lowered wholesale, and a PascalCase token has only its leading
/// uppercase run lowered. Multi-token input first lowers a leading acronym
/// word entirely, then derives the result from [`to_pascal_case`] by
/// lowering the leading uppercase run.
///
/// # Example
/// ```
/// use recase_core::case::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("Assignment teamMember"), "assignmentTeamMember");
/// assert_eq!(to_camel_case("REQs"), "reqs");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let normalized = normalize(input);

    if is_single_token(&normalized) {
        if starts_lower(&normalized) {
            return normalized;
        }
        if !is_acronym(&normalized) && starts_upper(&normalized) {
            return lower_leading_upper_run(&normalized);
        }
        // Pure acronyms and digit-leading tokens lower wholesale
        return normalized.to_lowercase();
    }

    let mut tokens: Vec<String> = split_tokens(&normalized).map(String::from).collect();
    if let Some(first) = tokens.first_mut() {
        // A leading acronym word is lowered entirely, not just its first
        // letter; otherwise the whole run would be swallowed below
        if is_acronym(first) {
            *first = first.to_lowercase();
        }
    }
    lower_leading_upper_run(&to_pascal_case(&tokens.join(" ")))
}

/// Convert to kebab-case.
///
/// Word boundaries inside camelCase/PascalCase tokens are split at every
/// lowercase-to-uppercase transition before lowering and joining with `-`.
///
/// # Example
/// ```
/// use recase_core::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case("Assignment teamMember"), "assignment-team-member");
/// assert_eq!(to_kebab_case("Hello_World 123_test"), "hello-world-123-test");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    let normalized = normalize(input);

    // Space out camel boundaries: "teamMember" -> "team Member"
    let mut spaced = String::with_capacity(normalized.len() + 8);
    let mut prev_is_lower = false;
    for c in normalized.chars() {
        if prev_is_lower && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        prev_is_lower = c.is_ascii_lowercase();
        spaced.push(c);
    }

    let mut out = String::with_capacity(spaced.len());
    for token in spaced.split_whitespace() {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(&token.to_ascii_lowercase());
    }
    out
}

/// Convert to snake_case: kebab-case with `_` separators.
pub fn to_snake_case(input: &str) -> String {
    to_kebab_case(input).replace('-', "_")
}

/// Convert to Title Case.
///
/// Splits on underscores when `underscore_separated`, otherwise on single
/// whitespace characters (interior spacing survives the rejoin as empty
/// words). A word that is already fully uppercase is left alone unless the
/// input is underscore-separated; every other word is capitalized at its
/// first word character with the remainder lowered.
///
/// # Example
/// ```
/// use recase_core::case::to_title_case;
///
/// assert_eq!(to_title_case("hello world", false), "Hello World");
/// assert_eq!(to_title_case("hello_world", true), "Hello World");
/// assert_eq!(to_title_case("HTML parser", false), "HTML Parser");
/// ```
pub fn to_title_case(input: &str, underscore_separated: bool) -> String {
    let words: Vec<&str> = if underscore_separated {
        input.split('_').collect()
    } else {
        input.split(char::is_whitespace).collect()
    };

    words
        .iter()
        .map(|word| {
            if !underscore_separated && is_upper_case(word) {
                (*word).to_string()
            } else {
                capitalize_words(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize each word-character-led run inside `text`, lowering the rest.
///
/// A "word" starts at a word character and extends through the following
/// non-whitespace characters, so `"don't"` becomes `"Don't"` and `"'tis"`
/// becomes `"'Tis"`.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else if c.is_ascii_alphanumeric() || c == '_' {
            in_word = true;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert to Sentence case.
///
/// Splits on `.` plus any following whitespace, raises the first character
/// of each fragment, rejoins with `". "`, and removes a stray whitespace
/// character immediately before each period. Input that ends with a period
/// keeps the trailing `". "` join, so the result ends with a space.
///
/// # Example
/// ```
/// use recase_core::case::to_sentence_case;
///
/// assert_eq!(
///     to_sentence_case("hello world. this is rust"),
///     "Hello world. This is rust",
/// );
/// ```
pub fn to_sentence_case(input: &str) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            fragments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fragments.push(current);

    let joined = fragments
        .iter()
        .map(|fragment| {
            let mut chars = fragment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(". ");

    // Drop the single whitespace character preceding each period
    let mut out = String::with_capacity(joined.len());
    let mut iter = joined.chars().peekable();
    while let Some(c) = iter.next() {
        if c.is_whitespace() && iter.peek() == Some(&'.') {
            continue;
        }
        out.push(c);
    }
    out
}
