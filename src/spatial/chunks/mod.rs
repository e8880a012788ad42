//! Chunk System - fixed-size chunk grid that decides which regions are
//! simulated on the next tick.
//!
//! Chunks own no cell data. The tracker keeps one bit per chunk for the
//! set being accumulated and hands the whole set over in
//! `consume_active_set`, leaving a fresh empty set behind.

mod bitset;
mod lifecycle;

/// Chunk coordinates (not cell coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey {
    pub cx: u32,
    pub cy: u32,
}

impl ChunkKey {
    #[inline]
    pub fn new(cx: u32, cy: u32) -> Self {
        Self { cx, cy }
    }
}

/// Tracks which chunks saw activity since the last tick.
pub struct ChunkTracker {
    chunk_size: u32,
    chunks_x: u32,
    chunks_y: u32,
    chunk_count: usize,

    /// Chunks marked for the next tick.
    pending_bits: Vec<u64>,
    /// Chunks handed out by the most recent `consume_active_set`.
    last_consumed: Vec<ChunkKey>,
}

impl ChunkTracker {
    /// Create a tracker for given world dimensions. `chunk_size` must be > 0.
    pub fn new(world_width: u32, world_height: u32, chunk_size: u32) -> Self {
        debug_assert!(chunk_size > 0, "chunk_size must be non-zero");
        let chunks_x = world_width.div_ceil(chunk_size);
        let chunks_y = world_height.div_ceil(chunk_size);
        let chunk_count = (chunks_x as usize) * (chunks_y as usize);

        Self {
            chunk_size,
            chunks_x,
            chunks_y,
            chunk_count,
            pending_bits: vec![0u64; chunk_count.div_ceil(64)],
            last_consumed: Vec::new(),
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Get chunk dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    /// Get total chunk count.
    #[inline]
    pub fn total_chunks(&self) -> usize {
        self.chunk_count
    }
}
