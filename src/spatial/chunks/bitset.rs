use super::*;

impl ChunkTracker {
    // === BitSet Helpers ===

    #[inline(always)]
    pub(super) fn set_bit(bits: &mut [u64], idx: usize) {
        let word = idx >> 6;  // idx / 64
        let bit = idx & 63;   // idx % 64
        if word < bits.len() {
            bits[word] |= 1u64 << bit;
        }
    }

    #[inline(always)]
    pub(super) fn check_bit(bits: &[u64], idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < bits.len() && (bits[word] & (1u64 << bit)) != 0
    }

    // === Chunk indexing ===

    /// Get chunk index from chunk coordinates
    #[inline]
    pub fn chunk_idx_from_coords(&self, cx: u32, cy: u32) -> usize {
        (cy as usize) * (self.chunks_x as usize) + (cx as usize)
    }

    /// Check if chunk coordinates are valid
    #[inline]
    pub fn chunk_in_bounds(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cx < self.chunks_x as i32 && cy >= 0 && cy < self.chunks_y as i32
    }

    /// Cell bounds of a chunk as `(start_x, start_y, end_x, end_y)`, end exclusive,
    /// clipped to the world.
    #[inline]
    pub fn chunk_bounds(&self, key: ChunkKey, world_width: u32, world_height: u32) -> (u32, u32, u32, u32) {
        let start_x = key.cx * self.chunk_size;
        let start_y = key.cy * self.chunk_size;
        let end_x = (start_x + self.chunk_size).min(world_width);
        let end_y = (start_y + self.chunk_size).min(world_height);
        (start_x, start_y, end_x, end_y)
    }

    // === Activity marking ===

    /// Owning chunk first, then the 8 neighbours.
    const HALO_OFFSETS: [(i32, i32); 9] = [
        (0, 0),
        (-1, 0),   // Left
        (1, 0),    // Right
        (0, -1),   // Top
        (0, 1),    // Bottom
        (-1, -1),  // Top-Left
        (1, -1),   // Top-Right
        (-1, 1),   // Bottom-Left
        (1, 1),    // Bottom-Right
    ];

    /// Mark the chunk owning cell (x, y) and its 8 neighbours active for
    /// the next tick. Cells outside the world are ignored.
    pub fn mark_active(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let cxi = x / self.chunk_size as i32;
        let cyi = y / self.chunk_size as i32;
        if !self.chunk_in_bounds(cxi, cyi) {
            return;
        }

        for (dx, dy) in Self::HALO_OFFSETS {
            let ncx = cxi + dx;
            let ncy = cyi + dy;
            if self.chunk_in_bounds(ncx, ncy) {
                let idx = self.chunk_idx_from_coords(ncx as u32, ncy as u32);
                Self::set_bit(&mut self.pending_bits, idx);
            }
        }
    }

    /// Is the chunk queued for the next tick?
    #[inline]
    pub fn is_pending(&self, cx: u32, cy: u32) -> bool {
        if cx >= self.chunks_x || cy >= self.chunks_y {
            return false;
        }
        Self::check_bit(&self.pending_bits, self.chunk_idx_from_coords(cx, cy))
    }
}
