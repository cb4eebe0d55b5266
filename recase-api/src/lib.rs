//! Public API for recase case conversion and text transformation
//!
//! This crate provides a clean, stable interface over the algorithms in
//! `recase-core`: free functions for every conversion, a [`Transformer`]
//! entry point, [`Case`] dispatch, configurable chunking, and the
//! [`StrTransform`] extension trait for method-call ergonomics.
//!
//! # Example
//!
//! ```rust
//! use recase_api::{chunk, ChunkConfig, StrTransform};
//!
//! assert_eq!("Assignment teamMember".to_camel_case(), "assignmentTeamMember");
//! assert_eq!("hello world".to_kebab_case(), "hello-world");
//!
//! let output = chunk("hello world", &ChunkConfig::by_count(3)).unwrap();
//! assert_eq!(output.joined(), Some("hel lo  world"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

// Re-export key types
pub use config::{ChunkConfig, ChunkConfigBuilder};
pub use dto::{Case, ChunkOutput};
pub use error::{ApiError, Result};

// Re-export the conversion family and utilities from the core crate
pub use recase_core::case::{
    to_camel_case, to_kebab_case, to_pascal_case, to_sentence_case, to_snake_case, to_title_case,
};
pub use recase_core::classify::{is_lower_case, is_title_case, is_upper_case};
pub use recase_core::edit::{contains, insert_at, replace_at, reverse, Replacement};
pub use recase_core::indent::trim_indent;
pub use recase_core::normalize::normalize;
pub use recase_core::{ChunkPlan, CoreError};

use recase_core::{case, chunk as core_chunk, classify, edit, indent};

/// Split `text` into chunks according to `config`.
///
/// Count-based chunking takes precedence over length-based chunking when
/// both are configured; with neither configured the result is an empty
/// joined string. The output is [`ChunkOutput::Pieces`] when
/// `config.raw_output` is set, otherwise the pieces joined with single
/// spaces.
pub fn chunk(text: &str, config: &ChunkConfig) -> Result<ChunkOutput> {
    config.validate()?;
    tracing::trace!(?config, chars = text.chars().count(), "chunking text");

    let pieces = match (
        config.number_of_chunks.filter(|&n| n > 0),
        config.chunk_length,
    ) {
        (Some(count), _) => core_chunk::split_by_count(text, count, config.index_chunk_length),
        (None, Some(length)) => core_chunk::split_by_length(text, length)?,
        (None, None) => Vec::new(),
    };

    if config.raw_output {
        Ok(ChunkOutput::Pieces(pieces))
    } else {
        Ok(ChunkOutput::Joined(pieces.join(" ")))
    }
}

/// Compute the chunk lengths `config` would produce for `text`, without
/// materializing the pieces.
pub fn chunk_lengths(text: &str, config: &ChunkConfig) -> Result<ChunkOutput> {
    config.validate()?;
    let total = text.chars().count();

    let lengths = match (
        config.number_of_chunks.filter(|&n| n > 0),
        config.chunk_length,
    ) {
        (Some(count), _) => {
            core_chunk::plan_by_count(total, count, config.index_chunk_length).lengths
        }
        (None, Some(length)) => {
            let mut lengths = Vec::new();
            let mut remaining = total;
            loop {
                let take = remaining.min(length);
                lengths.push(take);
                remaining -= take;
                if remaining == 0 {
                    break;
                }
            }
            lengths
        }
        (None, None) => Vec::new(),
    };
    Ok(ChunkOutput::Lengths(lengths))
}

/// Stateless entry point for the transformation family.
///
/// All operations are pure; the transformer exists to give call sites a
/// single value to thread through and to centralize trace instrumentation.
/// It is trivially `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer;

impl Transformer {
    /// Create a transformer.
    pub fn new() -> Self {
        Self
    }

    /// Apply a casing convention chosen at runtime.
    pub fn convert(&self, case: Case, text: &str) -> String {
        tracing::trace!(?case, chars = text.chars().count(), "applying case conversion");
        case.apply(text)
    }

    /// Convert to camelCase.
    pub fn to_camel_case(&self, text: &str) -> String {
        self.convert(Case::Camel, text)
    }

    /// Convert to PascalCase.
    pub fn to_pascal_case(&self, text: &str) -> String {
        self.convert(Case::Pascal, text)
    }

    /// Convert to kebab-case.
    pub fn to_kebab_case(&self, text: &str) -> String {
        self.convert(Case::Kebab, text)
    }

    /// Convert to snake_case.
    pub fn to_snake_case(&self, text: &str) -> String {
        self.convert(Case::Snake, text)
    }

    /// Convert to Title Case, splitting on underscores when
    /// `underscore_separated`.
    pub fn to_title_case(&self, text: &str, underscore_separated: bool) -> String {
        case::to_title_case(text, underscore_separated)
    }

    /// Convert to Sentence case.
    pub fn to_sentence_case(&self, text: &str) -> String {
        self.convert(Case::Sentence, text)
    }

    /// Split `text` into chunks according to `config`.
    pub fn chunk(&self, text: &str, config: &ChunkConfig) -> Result<ChunkOutput> {
        chunk(text, config)
    }

    /// Compute the chunk lengths `config` would produce for `text`.
    pub fn chunk_lengths(&self, text: &str, config: &ChunkConfig) -> Result<ChunkOutput> {
        chunk_lengths(text, config)
    }
}

/// Extension methods over anything string-like, mirroring the free
/// functions.
///
/// The blanket implementation covers `&str`, `String`, and other
/// `AsRef<str>` types, so the family reads as method calls at the call
/// site without any ambient registration.
pub trait StrTransform {
    /// Convert to camelCase.
    fn to_camel_case(&self) -> String;
    /// Convert to PascalCase.
    fn to_pascal_case(&self) -> String;
    /// Convert to kebab-case.
    fn to_kebab_case(&self) -> String;
    /// Convert to snake_case.
    fn to_snake_case(&self) -> String;
    /// Convert to Title Case, splitting on underscores when
    /// `underscore_separated`.
    fn to_title_case(&self, underscore_separated: bool) -> String;
    /// Convert to Sentence case.
    fn to_sentence_case(&self) -> String;
    /// True iff every space-delimited word is capitalized or fully
    /// uppercase.
    fn is_title_case(&self) -> bool;
    /// True iff the string equals its own uppercase mapping.
    fn is_upper_case(&self) -> bool;
    /// True iff the string equals its own lowercase mapping.
    fn is_lower_case(&self) -> bool;
    /// The characters in reverse order.
    fn reversed(&self) -> String;
    /// Replace the character range starting at `start` with the
    /// replacement; see [`replace_at`].
    fn replace_at(&self, start: usize, replacement: Replacement<'_>, end: Option<usize>)
        -> String;
    /// Insert `insertion` at character position `index`.
    fn insert_at(&self, index: usize, insertion: &str) -> String;
    /// Remove the common leading indentation from every line.
    fn trim_indent(&self) -> String;
}

impl<T> StrTransform for T
where
    T: AsRef<str>,
{
    fn to_camel_case(&self) -> String {
        case::to_camel_case(self.as_ref())
    }

    fn to_pascal_case(&self) -> String {
        case::to_pascal_case(self.as_ref())
    }

    fn to_kebab_case(&self) -> String {
        case::to_kebab_case(self.as_ref())
    }

    fn to_snake_case(&self) -> String {
        case::to_snake_case(self.as_ref())
    }

    fn to_title_case(&self, underscore_separated: bool) -> String {
        case::to_title_case(self.as_ref(), underscore_separated)
    }

    fn to_sentence_case(&self) -> String {
        case::to_sentence_case(self.as_ref())
    }

    fn is_title_case(&self) -> bool {
        classify::is_title_case(self.as_ref())
    }

    fn is_upper_case(&self) -> bool {
        classify::is_upper_case(self.as_ref())
    }

    fn is_lower_case(&self) -> bool {
        classify::is_lower_case(self.as_ref())
    }

    fn reversed(&self) -> String {
        edit::reverse(self.as_ref())
    }

    fn replace_at(
        &self,
        start: usize,
        replacement: Replacement<'_>,
        end: Option<usize>,
    ) -> String {
        edit::replace_at(self.as_ref(), start, replacement, end)
    }

    fn insert_at(&self, index: usize, insertion: &str) -> String {
        edit::insert_at(self.as_ref(), index, insertion)
    }

    fn trim_indent(&self) -> String {
        indent::trim_indent(self.as_ref())
    }
}
