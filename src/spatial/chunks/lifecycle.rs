use super::*;

impl ChunkTracker {
    // === Tick hand-over ===

    /// Return every chunk marked since the previous call, in row-major
    /// order, and start an empty set for the following tick.
    pub fn consume_active_set(&mut self) -> Vec<ChunkKey> {
        let mut keys = Vec::with_capacity(self.pending_count());
        for (word_idx, word) in self.pending_bits.iter_mut().enumerate() {
            let mut w = *word;
            while w != 0 {
                let bit = w.trailing_zeros() as usize;
                w &= w - 1; // Clear lowest set bit
                let idx = (word_idx << 6) | bit;
                if idx < self.chunk_count {
                    let cx = (idx % self.chunks_x as usize) as u32;
                    let cy = (idx / self.chunks_x as usize) as u32;
                    keys.push(ChunkKey { cx, cy });
                }
            }
            *word = 0;
        }
        self.last_consumed.clone_from(&keys);
        keys
    }

    /// Drop everything queued for the next tick.
    pub fn reset(&mut self) {
        self.pending_bits.fill(0);
        self.last_consumed.clear();
    }

    // === Statistics ===

    /// Number of chunks queued for the next tick.
    pub fn pending_count(&self) -> usize {
        self.pending_bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Chunks processed by the most recent tick.
    pub fn last_consumed(&self) -> &[ChunkKey] {
        &self.last_consumed
    }

    /// Linear indices (cy * chunks_x + cx) of the most recently consumed set.
    pub fn last_consumed_indices(&self) -> Vec<u32> {
        self.last_consumed
            .iter()
            .map(|k| self.chunk_idx_from_coords(k.cx, k.cy) as u32)
            .collect()
    }
}
