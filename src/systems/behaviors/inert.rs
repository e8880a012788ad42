//! Classes that never move on their own.

use super::{Behavior, UpdateContext};

pub struct EmptyBehavior;

impl Behavior for EmptyBehavior {
    fn update(&self, _ctx: &mut UpdateContext) {}
}

/// Stone, wood, brick: only ever changed by `set`.
pub struct ImmovableBehavior;

impl Behavior for ImmovableBehavior {
    fn update(&self, _ctx: &mut UpdateContext) {}
}
