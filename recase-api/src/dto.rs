//! Data Transfer Objects for the API

use recase_core::case;

/// Target casing convention for dispatch-style conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Case {
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// kebab-case
    Kebab,
    /// snake_case
    Snake,
    /// Title Case (whitespace-separated input)
    Title,
    /// Sentence case
    Sentence,
}

impl Case {
    /// Apply this casing convention to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::Camel => case::to_camel_case(text),
            Case::Pascal => case::to_pascal_case(text),
            Case::Kebab => case::to_kebab_case(text),
            Case::Snake => case::to_snake_case(text),
            Case::Title => case::to_title_case(text, false),
            Case::Sentence => case::to_sentence_case(text),
        }
    }
}

/// Result of a chunking operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkOutput {
    /// Pieces joined with single spaces (the default surface)
    Joined(String),
    /// The pieces themselves (raw output)
    Pieces(Vec<String>),
    /// Planned chunk lengths instead of text
    Lengths(Vec<usize>),
}

impl ChunkOutput {
    /// The joined string, when this is a [`ChunkOutput::Joined`].
    pub fn joined(&self) -> Option<&str> {
        match self {
            ChunkOutput::Joined(text) => Some(text),
            _ => None,
        }
    }

    /// The raw pieces, when this is a [`ChunkOutput::Pieces`].
    pub fn pieces(&self) -> Option<&[String]> {
        match self {
            ChunkOutput::Pieces(pieces) => Some(pieces),
            _ => None,
        }
    }

    /// The planned lengths, when this is a [`ChunkOutput::Lengths`].
    pub fn lengths(&self) -> Option<&[usize]> {
        match self {
            ChunkOutput::Lengths(lengths) => Some(lengths),
            _ => None,
        }
    }
}
