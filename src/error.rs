//! Engine error type.
//!
//! Only construction can fail. Everything that happens per tick absorbs
//! bad input (out-of-range coordinates, unknown element ids) as a no-op.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Grid dimensions are zero or the cell count does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// Chunk side length must be at least one cell and fit in an i32.
    #[error("invalid chunk size {0}")]
    InvalidChunkSize(u32),
    /// Configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
