use tracing::debug;

use crate::elements::{ElementId, ElementKind};

use super::WorldCore;

pub(super) fn set(world: &mut WorldCore, x: i32, y: i32, kind: ElementKind) -> bool {
    world.grid.set(x, y, kind)
}

pub(super) fn set_by_id(world: &mut WorldCore, x: i32, y: i32, id: ElementId) -> bool {
    match ElementKind::from_id(id) {
        Some(kind) => set(world, x, y, kind),
        None => false,
    }
}

pub(super) fn set_by_key(world: &mut WorldCore, x: i32, y: i32, key: &str) -> bool {
    match ElementKind::from_key(key) {
        Some(kind) => set(world, x, y, kind),
        None => false,
    }
}

pub(super) fn spawn_in_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, kind: ElementKind) -> u32 {
    if radius < 0 {
        return 0;
    }

    // Clip the bounding box first so huge brushes stay cheap.
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let min_x = (cx - r).max(0);
    let max_x = (cx + r).min(world.grid.width() as i64 - 1);
    let min_y = (cy - r).max(0);
    let max_y = (cy + r).min(world.grid.height() as i64 - 1);
    let r2 = r * r;

    let mut written = 0;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 && world.grid.set(x as i32, y as i32, kind) {
                written += 1;
            }
        }
    }
    written
}

pub(super) fn spawn_in_radius_by_id(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, id: ElementId) -> u32 {
    match ElementKind::from_id(id) {
        Some(kind) => spawn_in_radius(world, cx, cy, radius, kind),
        None => 0,
    }
}

pub(super) fn spawn_in_radius_by_key(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, key: &str) -> u32 {
    match ElementKind::from_key(key) {
        Some(kind) => spawn_in_radius(world, cx, cy, radius, kind),
        None => 0,
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.processed.clear();
    debug!(tick = world.tick, "world cleared");
}
