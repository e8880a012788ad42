//! PowderBehavior - movable solids (sand, dirt)
//!
//! Falls, then rolls diagonally off piles. Never spreads sideways on its own,
//! which is what lets it heap up.

use super::common::{fall, finish_idle, integrate_gravity, slide_diagonal};
use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let run = integrate_gravity(ctx);
        if fall(ctx, run) || slide_diagonal(ctx) {
            return;
        }
        finish_idle(ctx);
    }
}
