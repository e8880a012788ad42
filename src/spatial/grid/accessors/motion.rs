use super::super::*;

impl Grid {
    // === Velocity access (index based, caller guarantees bounds) ===
    #[inline]
    pub fn vx(&self, idx: usize) -> f32 {
        self.vx[idx]
    }

    #[inline]
    pub fn vy(&self, idx: usize) -> f32 {
        self.vy[idx]
    }

    #[inline]
    pub fn set_vx(&mut self, idx: usize, v: f32) {
        self.vx[idx] = v;
    }

    #[inline]
    pub fn set_vy(&mut self, idx: usize, v: f32) {
        self.vy[idx] = v;
    }

    // === Gravity accumulator ===
    #[inline]
    pub fn fall_acc(&self, idx: usize) -> f32 {
        self.fall_acc[idx]
    }

    #[inline]
    pub fn set_fall_acc(&mut self, idx: usize, v: f32) {
        self.fall_acc[idx] = v;
    }

    // === Settling ===
    #[inline]
    pub fn is_settled(&self, idx: usize) -> bool {
        self.settled[idx] != 0
    }

    /// Count one more tick without relocation. Once the count reaches
    /// `threshold` the cell is flagged settled; a zero threshold never settles.
    pub fn bump_idle(&mut self, idx: usize, threshold: u8) {
        self.idle[idx] = self.idle[idx].saturating_add(1);
        if threshold > 0 && self.idle[idx] >= threshold {
            self.settled[idx] = 1;
        }
    }
}
