//! Chunking configuration

use crate::error::{ApiError, Result};

/// Configuration for [`chunk`](crate::chunk).
///
/// `number_of_chunks` takes precedence over `chunk_length` when both are
/// set; with neither set, chunking produces an empty result. A zero
/// `number_of_chunks` or `index_chunk_length` counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkConfig {
    /// Length of an explicit leading index chunk, consumed out of
    /// `number_of_chunks`
    pub index_chunk_length: Option<usize>,
    /// Number of chunks to divide the text into, remainder in the last
    pub number_of_chunks: Option<usize>,
    /// Fixed chunk length, final chunk shorter
    pub chunk_length: Option<usize>,
    /// Return the pieces themselves instead of joining them with spaces
    pub raw_output: bool,
}

impl ChunkConfig {
    /// Divide into `count` chunks (the bare-number calling convention).
    pub fn by_count(count: usize) -> Self {
        Self {
            number_of_chunks: Some(count),
            ..Self::default()
        }
    }

    /// Successive chunks of `length` characters.
    pub fn by_length(length: usize) -> Self {
        Self {
            chunk_length: Some(length),
            ..Self::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> ChunkConfigBuilder {
        ChunkConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// A zero `chunk_length` is rejected outright: it could never consume
    /// input, so the length-based branch would not terminate.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_length == Some(0) {
            return Err(ApiError::Config(
                "chunk length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ChunkConfigBuilder {
    config: ChunkConfig,
}

impl ChunkConfigBuilder {
    /// Set the leading index chunk length.
    pub fn index_chunk_length(mut self, length: usize) -> Self {
        self.config.index_chunk_length = Some(length);
        self
    }

    /// Set the number of chunks.
    pub fn number_of_chunks(mut self, count: usize) -> Self {
        self.config.number_of_chunks = Some(count);
        self
    }

    /// Set the fixed chunk length.
    pub fn chunk_length(mut self, length: usize) -> Self {
        self.config.chunk_length = Some(length);
        self
    }

    /// Return raw pieces instead of a joined string.
    pub fn raw_output(mut self, raw: bool) -> Self {
        self.config.raw_output = raw;
        self
    }

    /// Build the configuration, validating it first.
    pub fn build(self) -> Result<ChunkConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
