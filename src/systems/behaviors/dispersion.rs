//! Lateral spreading for liquids and gases.
//!
//! The preferred side is kept in the sign of `vx`. The scan walks outward
//! over displaceable cells and stops short of any cell that opens onto a gap
//! along gravity, so a puddle flattens over a surface instead of draining
//! through holes sideways.

use rand::Rng;

use super::UpdateContext;

/// Try the preferred side, then the other one. A failed preferred side
/// flips the stored preference.
pub(super) fn disperse(ctx: &mut UpdateContext) -> bool {
    let range = ctx.kind().props().dispersion as i32;
    if range == 0 {
        return false;
    }

    let idx = ctx.idx();
    let preferred = preferred_side(ctx, idx);
    if shift(ctx, preferred, range) {
        return true;
    }

    ctx.grid.set_vx(idx, -preferred as f32);
    shift(ctx, -preferred, range)
}

fn shift(ctx: &mut UpdateContext, dir: i32, range: i32) -> bool {
    let Some(tx) = scan_side(ctx, dir, range) else {
        return false;
    };
    if !ctx.try_move(tx, ctx.y) {
        return false;
    }
    let idx = ctx.idx();
    ctx.grid.set_vx(idx, dir as f32);
    ctx.grid.set_vy(idx, 0.0);
    ctx.grid.set_fall_acc(idx, 0.0);
    true
}

/// Furthest reachable column on one side, or `None` if the first cell is closed.
pub(super) fn scan_side(ctx: &UpdateContext, dir: i32, range: i32) -> Option<i32> {
    let below = ctx.behavior().fall_sign();
    let mut best = None;
    for step in 1..=range {
        let tx = ctx.x + dir * step;
        if !ctx.can_enter(tx, ctx.y) || ctx.can_enter(tx, ctx.y + below) {
            break;
        }
        best = Some(tx);
    }
    best
}

/// Sign of `vx`, drawn once from the seeded RNG for a fresh particle.
fn preferred_side(ctx: &mut UpdateContext, idx: usize) -> i32 {
    let vx = ctx.grid.vx(idx);
    if vx > 0.0 {
        1
    } else if vx < 0.0 {
        -1
    } else {
        let dir = if ctx.rng.gen_bool(0.5) { 1 } else { -1 };
        ctx.grid.set_vx(idx, dir as f32);
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_once;
    use crate::elements::ElementKind;
    use crate::grid::Grid;

    #[test]
    fn liquid_on_single_row_spreads_to_range() {
        let mut grid = Grid::new(20, 1, 5);
        grid.set(0, 0, ElementKind::Water);
        assert_eq!(run_once(&mut grid, 0, 0, 0), (5, 0));
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn scan_stops_short_of_a_gap() {
        // Floor with a hole at x=4: water at x=1 may not pass over it.
        let mut grid = Grid::new(8, 2, 4);
        for x in 0..8 {
            if x != 4 {
                grid.set(x, 1, ElementKind::Stone);
            }
        }
        grid.set(1, 0, ElementKind::Water);
        let idx = grid.index(1, 0);
        grid.set_vx(idx, 1.0);

        assert_eq!(run_once(&mut grid, 1, 0, 0), (3, 0));
    }

    #[test]
    fn blocked_side_flips_preference() {
        let mut grid = Grid::new(6, 2, 3);
        for x in 0..6 {
            grid.set(x, 1, ElementKind::Stone);
        }
        grid.set(2, 0, ElementKind::Water);
        grid.set(3, 0, ElementKind::Stone);
        let idx = grid.index(2, 0);
        grid.set_vx(idx, 1.0);

        assert_eq!(run_once(&mut grid, 2, 0, 0), (0, 0));
        let idx = grid.index(0, 0);
        assert_eq!(grid.vx(idx), -1.0);
    }

    #[test]
    fn walled_in_liquid_keeps_flipped_preference() {
        let mut grid = Grid::new(3, 2, 3);
        for x in 0..3 {
            grid.set(x, 1, ElementKind::Stone);
        }
        grid.set(0, 0, ElementKind::Stone);
        grid.set(2, 0, ElementKind::Stone);
        grid.set(1, 0, ElementKind::Water);
        let idx = grid.index(1, 0);
        grid.set_vx(idx, 1.0);

        assert_eq!(run_once(&mut grid, 1, 0, 0), (1, 0));
        assert_eq!(grid.vx(idx), -1.0);
    }
}
