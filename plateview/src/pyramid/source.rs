//! The loader-facing chunk fetch contract.

use std::future::Future;

use thiserror::Error;

use super::Shape;
use crate::tile::TileError;

/// Raw bytes of one chunk as handed over by a loader.
///
/// Samples are unsigned 8-bit values packed row-major. `width` and
/// `height` describe the decoded tile; the number of samples per pixel is
/// whatever the buffer length implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    /// Packed samples
    pub data: Vec<u8>,
    /// Pixel columns
    pub width: u32,
    /// Pixel rows
    pub height: u32,
}

impl RawChunk {
    /// Create a chunk from its bytes and (width, height).
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// Errors a loader may report for a chunk read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// No chunk is stored at this address
    #[error("No chunk at level {level}, row {row}, col {col}")]
    Missing { level: u32, row: u32, col: u32 },

    /// The stored chunk has a shape the loader cannot interpret
    #[error("Malformed chunk: {0}")]
    Malformed(String),

    /// The stored chunk could not be decompressed or decoded
    #[error("Chunk decode error: {0}")]
    Decode(String),

    /// The underlying store failed
    #[error("Chunk I/O error: {0}")]
    Io(String),
}

impl ChunkError {
    /// True for the "nothing stored here" case, which is not a fault.
    pub fn is_missing(&self) -> bool {
        matches!(self, ChunkError::Missing { .. })
    }
}

/// A multiscale image as exposed by a loader.
///
/// Implementations must tolerate many concurrent `get_raw_chunk` calls; the
/// crate never mutates a source after it has been handed over.
pub trait PyramidSource: Send + Sync {
    /// Identifier used in logs and error context.
    fn id(&self) -> &str;

    /// Number of levels, including the base.
    fn num_levels(&self) -> u32;

    /// Shape of the finest level.
    fn base_shape(&self) -> Shape;

    /// Chunk shape, identical at every level.
    fn chunk_shape(&self) -> Shape;

    /// Read one chunk.
    ///
    /// # Arguments
    ///
    /// * `level` - Level index, 0 being the base
    /// * `tile_y` - Chunk row within the level
    /// * `tile_x` - Chunk column within the level
    /// * `channel` - Channel chunk index; interleaved sources only have 0
    fn get_raw_chunk(
        &self,
        level: u32,
        tile_y: u32,
        tile_x: u32,
        channel: u32,
    ) -> impl Future<Output = Result<RawChunk, ChunkError>> + Send;

    /// Hook for tile faults the renderer reports back. Not interpreted here.
    fn on_tile_error(&self, _error: &TileError) {}
}
