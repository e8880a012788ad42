//! Per-tick "already handled" bitmap.
//!
//! A particle that moves down or sideways must not be picked up again when
//! the scan reaches its new cell in the same tick. The stepper owns one mask,
//! clears it at the start of every tick and marks both ends of every move.

pub struct ProcessedMask {
    width: u32,
    height: u32,
    bits: Vec<u64>,
}

impl ProcessedMask {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    #[inline]
    fn bit(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(bit) = self.bit(x, y) {
            self.bits[bit >> 6] |= 1u64 << (bit & 63);
        }
    }

    /// Out-of-range coordinates report as processed so callers never act on them.
    #[inline]
    pub fn is_marked(&self, x: i32, y: i32) -> bool {
        match self.bit(x, y) {
            Some(bit) => self.bits[bit >> 6] & (1u64 << (bit & 63)) != 0,
            None => true,
        }
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.bits.par_iter_mut().for_each(|w| *w = 0);
        }
        #[cfg(not(feature = "parallel"))]
        self.bits.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_and_clears() {
        let mut mask = ProcessedMask::new(70, 3);
        mask.mark(69, 0);
        mask.mark(0, 1);
        assert!(mask.is_marked(69, 0));
        assert!(mask.is_marked(0, 1));
        assert!(!mask.is_marked(1, 1));
        assert!(mask.is_marked(-1, 0));
        assert!(mask.is_marked(0, 3));

        mask.clear();
        assert!(!mask.is_marked(69, 0));
        assert!(!mask.is_marked(0, 1));
    }
}
