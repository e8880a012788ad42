//! Shared motion model for every movable class.
//!
//! Gravity feeds a fractional accumulator; whole units spill into `vy`,
//! which sets how far the particle may drop in one hop. Gases run the same
//! code with the vertical sign flipped.

use super::{lateral_dirs, UpdateContext};
use crate::elements::BehaviorKind;

/// Below this the decayed speed snaps to rest.
const REST_SPEED: f32 = 0.05;

/// Integrate gravity and return the number of cells to try this tick.
pub(super) fn integrate_gravity(ctx: &mut UpdateContext) -> i32 {
    let idx = ctx.idx();
    let props = ctx.kind().props();
    let sign = props.behavior.fall_sign() as f32;

    let mut acc = ctx.grid.fall_acc(idx) + props.gravity;
    let mut speed = ctx.grid.vy(idx).abs();
    if acc >= 1.0 {
        let whole = acc.floor();
        acc -= whole;
        speed = (speed + whole).min(props.max_speed);
    }
    ctx.grid.set_fall_acc(idx, acc);
    ctx.grid.set_vy(idx, speed * sign);

    (speed.floor() as i32).max(1)
}

/// Single hop straight along gravity to the furthest reachable cell within `run`.
pub(super) fn fall(ctx: &mut UpdateContext, run: i32) -> bool {
    let dir = ctx.behavior().fall_sign();
    let mut reach = 0;
    for step in 1..=run {
        if !ctx.can_enter(ctx.x, ctx.y + dir * step) {
            break;
        }
        reach = step;
    }
    reach > 0 && ctx.try_move(ctx.x, ctx.y + dir * reach)
}

/// One-cell diagonal along gravity, side order by tick parity.
pub(super) fn slide_diagonal(ctx: &mut UpdateContext) -> bool {
    let dy = ctx.behavior().fall_sign();
    for dx in lateral_dirs(ctx.tick) {
        if corner_blocked(ctx, dx, dy) {
            continue;
        }
        if ctx.try_move(ctx.x + dx, ctx.y + dy) {
            let idx = ctx.idx();
            let vy = ctx.grid.vy(idx);
            ctx.grid.set_vy(idx, vy * 0.5);
            return true;
        }
    }
    false
}

/// Every strategy failed: bleed off speed and count towards settling.
pub(super) fn finish_idle(ctx: &mut UpdateContext) {
    let idx = ctx.idx();
    let vy = ctx.grid.vy(idx) * 0.5;
    ctx.grid.set_vy(idx, if vy.abs() < REST_SPEED { 0.0 } else { vy });
    ctx.grid.set_fall_acc(idx, 0.0);
    ctx.grid.bump_idle(idx, ctx.settle_threshold);
}

/// A diagonal step may not squeeze between two walls touching at a corner.
#[inline]
fn corner_blocked(ctx: &UpdateContext, dx: i32, dy: i32) -> bool {
    is_wall(ctx, ctx.x + dx, ctx.y) && is_wall(ctx, ctx.x, ctx.y + dy)
}

#[inline]
fn is_wall(ctx: &UpdateContext, x: i32, y: i32) -> bool {
    !ctx.grid.in_bounds(x, y) || ctx.grid.kind_at(x, y).behavior() == BehaviorKind::ImmovableSolid
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_once;
    use crate::elements::ElementKind;
    use crate::grid::Grid;

    #[test]
    fn fresh_particle_drops_one_cell() {
        let mut grid = Grid::new(5, 5, 5);
        grid.set(2, 0, ElementKind::Sand);
        assert_eq!(run_once(&mut grid, 2, 0, 0), (2, 1));
        assert_eq!(grid.kind_at(2, 1), ElementKind::Sand);
        assert!(grid.is_empty(2, 0));
    }

    #[test]
    fn fast_particle_skips_to_furthest_free_cell() {
        let mut grid = Grid::new(3, 10, 5);
        grid.set(1, 0, ElementKind::Sand);
        grid.set(1, 4, ElementKind::Stone);
        let idx = grid.index(1, 0);
        grid.set_vy(idx, 6.0);

        assert_eq!(run_once(&mut grid, 1, 0, 0), (1, 3));
        let idx = grid.index(1, 3);
        assert_eq!(grid.vy(idx), 6.0);
    }

    #[test]
    fn accumulator_spills_whole_units_into_velocity() {
        let mut grid = Grid::new(3, 40, 8);
        grid.set(1, 0, ElementKind::Sand);
        let (mut x, mut y) = (1, 0);
        for tick in 0..6 {
            (x, y) = run_once(&mut grid, x, y, tick);
        }
        // 0.2 per tick spills one whole unit around the fifth tick.
        let idx = grid.index(x as u32, y as u32);
        assert_eq!(grid.vy(idx), 1.0);
        assert_eq!((x, y), (1, 6));
    }

    #[test]
    fn blocked_particle_rolls_diagonally_by_parity() {
        let mut grid = Grid::new(5, 3, 5);
        grid.set(2, 1, ElementKind::Sand);
        grid.set(2, 2, ElementKind::Sand);
        assert_eq!(run_once(&mut grid, 2, 1, 0), (1, 2));

        let mut grid = Grid::new(5, 3, 5);
        grid.set(2, 1, ElementKind::Sand);
        grid.set(2, 2, ElementKind::Sand);
        assert_eq!(run_once(&mut grid, 2, 1, 1), (3, 2));
    }

    #[test]
    fn corner_between_walls_is_watertight() {
        // Stone at (1,2) and (2,3) touch diagonally; the gap at (1,3) is sealed.
        let mut grid = Grid::new(4, 4, 4);
        grid.set(2, 2, ElementKind::Sand);
        grid.set(1, 2, ElementKind::Stone);
        grid.set(2, 3, ElementKind::Stone);
        grid.set(3, 3, ElementKind::Stone);

        assert_eq!(run_once(&mut grid, 2, 2, 0), (2, 2));
        assert!(grid.is_empty(1, 3));
    }

    #[test]
    fn grid_border_behaves_like_stone() {
        let mut grid = Grid::new(2, 3, 2);
        grid.set(0, 1, ElementKind::Sand);
        grid.set(0, 2, ElementKind::Stone);
        grid.set(1, 2, ElementKind::Stone);
        for tick in 0..2 {
            assert_eq!(run_once(&mut grid, 0, 1, tick), (0, 1));
        }
        assert_eq!(grid.particle_count(), 3);
        assert!(grid.is_empty(1, 1));
    }

    #[test]
    fn stuck_particle_settles_after_threshold() {
        let mut grid = Grid::new(3, 2, 2);
        grid.set(1, 1, ElementKind::Sand);
        for tick in 0..7 {
            run_once(&mut grid, 1, 1, tick);
            assert!(!grid.get(1, 1).settled);
        }
        run_once(&mut grid, 1, 1, 7);
        assert!(grid.get(1, 1).settled);
    }
}
