//! LiquidBehavior - falls like powder, then spreads sideways.

use super::common::{fall, finish_idle, integrate_gravity, slide_diagonal};
use super::dispersion::disperse;
use super::{Behavior, UpdateContext};

pub struct LiquidBehavior;

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let run = integrate_gravity(ctx);
        if fall(ctx, run) || slide_diagonal(ctx) || disperse(ctx) {
            return;
        }
        finish_idle(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::run_once;
    use crate::elements::ElementKind;
    use crate::grid::Grid;

    #[test]
    fn sinks_through_gas_but_floats_on_solid() {
        let mut grid = Grid::new(3, 3, 3);
        grid.set(1, 0, ElementKind::Water);
        grid.set(1, 1, ElementKind::Steam);
        grid.set(1, 2, ElementKind::Sand);
        assert_eq!(run_once(&mut grid, 1, 0, 0), (1, 1));
        assert_eq!(grid.kind_at(1, 0), ElementKind::Steam);
    }

    #[test]
    fn does_not_displace_other_liquid() {
        let mut grid = Grid::new(1, 2, 1);
        grid.set(0, 0, ElementKind::Water);
        grid.set(0, 1, ElementKind::Water);
        assert_eq!(run_once(&mut grid, 0, 0, 0), (0, 0));
    }
}
