//! Grid - Structure of Arrays (SoA) cell store
//!
//! Instead of: Vec<Cell>                       // per-write struct churn
//! We have:    kinds[], colors[], vx[], vy[]   // linear memory, one index space
//!
//! Every mutation goes through `set` or `move_cell`, which keep the colour
//! buffer in step with the logical grid and report the touched cells to the
//! chunk tracker for the next tick.

use crate::chunks::ChunkTracker;
use crate::elements::ElementKind;
use crate::palette::BG_COLOR;

mod indexing;
mod accessors;
mod moves;
mod processed;

pub use processed::ProcessedMask;

/// Snapshot of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub kind: ElementKind,
    pub vx: f32,
    pub vy: f32,
    pub settled: bool,
    pub color: u32,
}

impl Cell {
    /// Returned for every out-of-range read.
    pub const EMPTY: Cell = Cell {
        kind: ElementKind::Empty,
        vx: 0.0,
        vy: 0.0,
        settled: false,
        color: BG_COLOR,
    };

    #[inline]
    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }
}

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) kinds: Vec<ElementKind>,
    pub(crate) colors: Vec<u32>,         // ABGR packed color
    pub(crate) vx: Vec<f32>,             // lateral velocity / dispersion preference
    pub(crate) vy: Vec<f32>,             // vertical velocity, +y is down
    pub(crate) fall_acc: Vec<f32>,       // fractional gravity accumulator
    pub(crate) settled: Vec<u8>,         // 1 = skipped until disturbed
    pub(crate) idle: Vec<u8>,            // consecutive ticks without relocation

    chunks: ChunkTracker,
    particle_count: u32,
    write_serial: u32,
    palette_step: u32,                   // next entry for in-order palettes
}

impl Grid {
    /// Dimensions are validated by the caller; all three must be non-zero.
    pub fn new(width: u32, height: u32, chunk_size: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            kinds: vec![ElementKind::Empty; size],
            colors: vec![BG_COLOR; size],
            vx: vec![0.0; size],
            vy: vec![0.0; size],
            fall_acc: vec![0.0; size],
            settled: vec![0; size],
            idle: vec![0; size],
            chunks: ChunkTracker::new(width, height, chunk_size),
            particle_count: 0,
            write_serial: 0,
            palette_step: 0,
        }
    }

    #[inline]
    pub fn chunks(&self) -> &ChunkTracker {
        &self.chunks
    }

    #[inline]
    pub fn chunks_mut(&mut self) -> &mut ChunkTracker {
        &mut self.chunks
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    /// Clear the settled flag and idle counter of the 3x3 block around (x, y).
    fn wake_around(&mut self, x: i32, y: i32) {
        for ny in (y - 1)..=(y + 1) {
            for nx in (x - 1)..=(x + 1) {
                if self.in_bounds(nx, ny) {
                    let idx = self.index(nx as u32, ny as u32);
                    self.settled[idx] = 0;
                    self.idle[idx] = 0;
                }
            }
        }
    }
}
