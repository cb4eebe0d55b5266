//! Case conversion and text transformation algorithms
//!
//! This crate implements the detection-driven case-converter family behind
//! recase: every converter first classifies the casing convention its input
//! already follows (camelCase, PascalCase, an all-uppercase acronym, mixed
//! delimiters) and only then transforms it, so already-converted input
//! passes through unchanged and conversions are idempotent.
//!
//! # Architecture
//!
//! The converters sit on two small supporting layers:
//! - **Normalizer** ([`normalize`]): strips punctuation and collapses
//!   hyphen/underscore runs into spaces; every converter's first step.
//! - **Classifier** ([`classify`]): pure predicates over tokens (acronym?
//!   leading case? single token?) and whole strings (upper/lower/title).
//! - **Converters** ([`case`]): PascalCase is the anchor; camelCase derives
//!   from it by lowering the leading uppercase run, and snake_case is
//!   kebab-case with the separator substituted.
//!
//! Alongside the converters live the plain string utilities: chunk planning
//! ([`chunk`]), positional edits ([`edit`]), and indentation trimming
//! ([`indent`]).
//!
//! # Example
//!
//! ```rust
//! use recase_core::case::{to_camel_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("Assignment teamMember"), "assignmentTeamMember");
//! assert_eq!(to_kebab_case("Assignment teamMember"), "assignment-team-member");
//! ```

pub mod case;
pub mod chunk;
pub mod classify;
pub mod edit;
pub mod error;
pub mod indent;
pub mod normalize;

pub use case::{
    to_camel_case, to_kebab_case, to_pascal_case, to_sentence_case, to_snake_case, to_title_case,
};
pub use chunk::{plan_by_count, split_by_count, split_by_length, ChunkPlan};
pub use classify::{is_lower_case, is_title_case, is_upper_case};
pub use edit::{contains, insert_at, replace_at, reverse, Replacement};
pub use error::{CoreError, Result};
pub use indent::trim_indent;
pub use normalize::normalize;
