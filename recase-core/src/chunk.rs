//! Chunk planning and splitting
//!
//! Splitting a string into chunks happens in two steps: a [`ChunkPlan`] is
//! derived first (pure length arithmetic), then applied over the text's
//! characters. Boundaries come from prefix sums over the planned lengths,
//! so a plan can be inspected or serialized without touching the text.

use crate::error::{CoreError, Result};

/// Planned chunk lengths for a piece of text, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkPlan {
    /// Chunk lengths in characters
    pub lengths: Vec<usize>,
}

impl ChunkPlan {
    /// Chunk start offsets, derived from the lengths by prefix sum.
    pub fn boundaries(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.lengths.len());
        let mut acc = 0;
        for len in &self.lengths {
            offsets.push(acc);
            acc += len;
        }
        offsets
    }

    /// Total number of characters covered by the plan.
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }
}

/// Plan count-based chunking over `total_chars` characters.
///
/// An optional index chunk of `index_chunk_len` characters (clamped to the
/// text length; zero counts as absent) is taken first and consumes one of
/// the `count` chunks. The remainder is divided into chunks of
/// `floor(remaining / chunks_left)` characters each, with the division
/// remainder added entirely to the final chunk.
pub fn plan_by_count(
    total_chars: usize,
    count: usize,
    index_chunk_len: Option<usize>,
) -> ChunkPlan {
    let mut lengths = Vec::new();
    let mut remaining = total_chars;
    let mut chunks_left = count;

    if let Some(index_len) = index_chunk_len.filter(|&n| n > 0) {
        if chunks_left == 0 {
            return ChunkPlan { lengths };
        }
        let index_len = index_len.min(total_chars);
        lengths.push(index_len);
        remaining -= index_len;
        chunks_left -= 1;
    }
    if chunks_left == 0 {
        return ChunkPlan { lengths };
    }

    let chunk_len = remaining / chunks_left;
    for i in 1..=chunks_left {
        if i == chunks_left {
            lengths.push(chunk_len + remaining % chunks_left);
        } else {
            lengths.push(chunk_len);
        }
    }
    ChunkPlan { lengths }
}

/// Split `text` into `count` chunks, remainder in the last.
///
/// See [`plan_by_count`] for the length arithmetic. Lengths are character
/// counts, so multi-byte input is never split mid-character.
pub fn split_by_count(text: &str, count: usize, index_chunk_len: Option<usize>) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let plan = plan_by_count(chars.len(), count, index_chunk_len);

    let mut pieces = Vec::with_capacity(plan.lengths.len());
    let mut start = 0;
    for &len in &plan.lengths {
        let end = (start + len).min(chars.len());
        pieces.push(chars[start..end].iter().collect());
        start = end;
    }
    pieces
}

/// Split `text` into successive chunks of `chunk_len` characters, the final
/// chunk shorter when the length does not divide evenly.
///
/// The empty string yields a single empty chunk. A zero `chunk_len` could
/// never consume input, so it fails fast instead of looping.
pub fn split_by_length(text: &str, chunk_len: usize) -> Result<Vec<String>> {
    if chunk_len == 0 {
        return Err(CoreError::InvalidChunkLength { length: chunk_len });
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + chunk_len).min(chars.len());
        pieces.push(chars[start..end].iter().collect());
        start = end;
        if start >= chars.len() {
            break;
        }
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_distributes_remainder_into_last_chunk() {
        let plan = plan_by_count(11, 3, None);
        assert_eq!(plan.lengths, vec![3, 3, 5]);
        assert_eq!(plan.boundaries(), vec![0, 3, 6]);
        assert_eq!(plan.total(), 11);
    }

    #[test]
    fn plan_takes_index_chunk_first() {
        // 2-char index chunk, then 9 chars over the remaining 2 chunks
        let plan = plan_by_count(11, 3, Some(2));
        assert_eq!(plan.lengths, vec![2, 4, 5]);
    }

    #[test]
    fn plan_degenerate_counts() {
        assert_eq!(plan_by_count(11, 0, None).lengths, Vec::<usize>::new());
        // The index chunk consumes the only requested chunk
        assert_eq!(plan_by_count(11, 1, Some(2)).lengths, vec![2]);
        // Zero index length counts as absent
        assert_eq!(plan_by_count(11, 2, Some(0)).lengths, vec![5, 6]);
    }

    #[test]
    fn plan_count_exceeding_length() {
        let plan = plan_by_count(2, 5, None);
        assert_eq!(plan.lengths, vec![0, 0, 0, 0, 2]);
    }

    #[test]
    fn split_by_count_basics() {
        assert_eq!(split_by_count("hello world", 3, None), vec!["hel", "lo ", "world"]);
        assert_eq!(
            split_by_count("hello world", 3, Some(2)),
            vec!["he", "llo ", "world"]
        );
        assert_eq!(split_by_count("", 3, None), vec!["", "", ""]);
    }

    #[test]
    fn split_by_count_is_multibyte_safe() {
        let pieces = split_by_count("日本語のテキスト", 2, None);
        assert_eq!(pieces, vec!["日本語の", "テキスト"]);
    }

    #[test]
    fn split_by_length_basics() {
        assert_eq!(
            split_by_length("hello world", 3).unwrap(),
            vec!["hel", "lo ", "wor", "ld"]
        );
        assert_eq!(split_by_length("abc", 3).unwrap(), vec!["abc"]);
        assert_eq!(split_by_length("", 3).unwrap(), vec![""]);
    }

    #[test]
    fn split_by_length_rejects_zero() {
        assert_eq!(
            split_by_length("hello", 0),
            Err(CoreError::InvalidChunkLength { length: 0 })
        );
    }
}
