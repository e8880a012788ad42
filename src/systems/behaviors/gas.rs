//! GasBehavior - an inverted liquid.
//!
//! Same motion model as `LiquidBehavior` with gravity pointing up. Gases sit
//! at the bottom of the density order, so they only ever move into empty
//! cells and get pushed around by everything else.

use super::common::{fall, finish_idle, integrate_gravity, slide_diagonal};
use super::dispersion::disperse;
use super::{Behavior, UpdateContext};

pub struct GasBehavior;

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let run = integrate_gravity(ctx);
        if fall(ctx, run) || slide_diagonal(ctx) || disperse(ctx) {
            return;
        }
        finish_idle(ctx);
    }
}
