use super::*;

impl Grid {
    /// Swap the full contents of two cells.
    ///
    /// No-op returning `false` when either end is outside the grid or both
    /// ends are the same cell. A successful move wakes the 3x3 block around
    /// both ends and queues both owning chunks with their halos.
    pub fn move_cell(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let (Some(from), Some(to)) = (self.checked_index(from_x, from_y), self.checked_index(to_x, to_y)) else {
            return false;
        };
        if from == to {
            return false;
        }

        self.swap_idx(from, to);

        self.wake_around(from_x, from_y);
        self.wake_around(to_x, to_y);
        self.chunks.mark_active(from_x, from_y);
        self.chunks.mark_active(to_x, to_y);
        true
    }

    #[inline]
    fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.kinds.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.vx.swap(idx1, idx2);
        self.vy.swap(idx1, idx2);
        self.fall_acc.swap(idx1, idx2);
        self.settled.swap(idx1, idx2);
        self.idle.swap(idx1, idx2);
    }
}
