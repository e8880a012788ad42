use super::super::*;
use crate::palette::{color_with_variation, cycled_color, cycles_palette, palette};

impl Grid {
    /// Full snapshot of (x, y). Out-of-range reads yield `Cell::EMPTY`.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.checked_index(x, y) {
            Some(idx) => Cell {
                kind: self.kinds[idx],
                vx: self.vx[idx],
                vy: self.vy[idx],
                settled: self.settled[idx] != 0,
                color: self.colors[idx],
            },
            None => Cell::EMPTY,
        }
    }

    // === Type access ===
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> ElementKind {
        match self.checked_index(x, y) {
            Some(idx) => self.kinds[idx],
            None => ElementKind::Empty,
        }
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.checked_index(x, y)
            .is_some_and(|idx| self.kinds[idx].is_empty())
    }

    /// Overwrite (x, y) with a fresh particle of `kind`.
    ///
    /// Motion state resets, the colour is drawn from the element palette,
    /// and the owning chunk plus its halo is queued for the next tick.
    /// Returns `false` (and touches nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, kind: ElementKind) -> bool {
        let Some(idx) = self.checked_index(x, y) else {
            return false;
        };

        let prev = self.kinds[idx];
        if prev.is_empty() && !kind.is_empty() {
            self.particle_count += 1;
        } else if !prev.is_empty() && kind.is_empty() {
            self.particle_count = self.particle_count.saturating_sub(1);
        }

        self.write_serial = self.write_serial.wrapping_add(1);
        let seed = (idx as u32) ^ self.write_serial.rotate_left(16);

        self.kinds[idx] = kind;
        self.colors[idx] = if cycles_palette(kind) {
            let color = cycled_color(kind, self.palette_step);
            self.palette_step = (self.palette_step + 1) % palette(kind).len() as u32;
            color
        } else {
            color_with_variation(kind, seed)
        };
        self.vx[idx] = 0.0;
        self.vy[idx] = 0.0;
        self.fall_acc[idx] = 0.0;

        self.wake_around(x, y);
        self.chunks.mark_active(x, y);
        true
    }

    /// Reset every cell to empty. The chunk tracker is emptied too; a
    /// blank grid has nothing to simulate.
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.kinds.par_iter_mut().for_each(|k| *k = ElementKind::Empty);
            self.colors.par_iter_mut().for_each(|c| *c = BG_COLOR);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.kinds.fill(ElementKind::Empty);
            self.colors.fill(BG_COLOR);
        }
        self.vx.fill(0.0);
        self.vy.fill(0.0);
        self.fall_acc.fill(0.0);
        self.settled.fill(0);
        self.idle.fill(0);

        self.chunks.reset();
        self.particle_count = 0;
    }
}
