//! Behaviors - per-class movement state machines
//!
//! One unit struct per behavior class, dispatched by `BehaviorRegistry` over
//! the closed `BehaviorKind` enum. Shared gravity/velocity handling lives in
//! `common`; lateral spreading for liquids and gases lives in `dispersion`.

mod common;
mod dispersion;
mod gas;
mod inert;
mod liquid;
mod powder;

pub use gas::GasBehavior;
pub use inert::{EmptyBehavior, ImmovableBehavior};
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use rand_chacha::ChaCha8Rng;

use crate::elements::{BehaviorKind, ElementKind};
use crate::grid::{Grid, ProcessedMask};

/// Update context passed to behaviors.
///
/// `x`/`y` follow the particle: after a successful `try_move` they point at
/// the destination, so later strategies in the same call act on the new cell.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub processed: &'a mut ProcessedMask,
    pub rng: &'a mut ChaCha8Rng,
    pub x: i32,
    pub y: i32,
    pub tick: u64,
    pub settle_threshold: u8,
    /// Successful relocations performed through this context.
    pub moves: u32,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn idx(&self) -> usize {
        self.grid.index(self.x as u32, self.y as u32)
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.grid.kind_at(self.x, self.y)
    }

    #[inline]
    pub fn behavior(&self) -> BehaviorKind {
        self.kind().behavior()
    }

    /// Could the current particle swap into (tx, ty)? Out of range is never enterable.
    #[inline]
    pub fn can_enter(&self, tx: i32, ty: i32) -> bool {
        self.grid.in_bounds(tx, ty) && self.behavior().can_displace(self.grid.kind_at(tx, ty).behavior())
    }

    /// Relocate the current particle to (tx, ty) if the target is displaceable.
    ///
    /// Both ends are marked processed so neither is resolved again this tick.
    pub fn try_move(&mut self, tx: i32, ty: i32) -> bool {
        if !self.can_enter(tx, ty) {
            return false;
        }
        if !self.grid.move_cell(self.x, self.y, tx, ty) {
            return false;
        }
        self.processed.mark(self.x, self.y);
        self.processed.mark(tx, ty);
        self.x = tx;
        self.y = ty;
        self.moves += 1;
        true
    }
}

/// Behavior trait - each class implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Horizontal try order for this tick: even ticks look left first.
#[inline]
pub fn lateral_dirs(tick: u64) -> [i32; 2] {
    if tick & 1 == 0 { [-1, 1] } else { [1, -1] }
}

/// Behavior registry - dispatch by class
pub struct BehaviorRegistry {
    empty: EmptyBehavior,
    immovable: ImmovableBehavior,
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            empty: EmptyBehavior,
            immovable: ImmovableBehavior,
            powder: PowderBehavior,
            liquid: LiquidBehavior,
            gas: GasBehavior,
        }
    }

    /// Dispatch update to the behavior of the given class
    pub fn update(&self, class: BehaviorKind, ctx: &mut UpdateContext) {
        match class {
            BehaviorKind::Empty => self.empty.update(ctx),
            BehaviorKind::ImmovableSolid => self.immovable.update(ctx),
            BehaviorKind::MovableSolid => self.powder.update(ctx),
            BehaviorKind::Liquid => self.liquid.update(ctx),
            BehaviorKind::Gas => self.gas.update(ctx),
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
