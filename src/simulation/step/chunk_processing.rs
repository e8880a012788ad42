use crate::behaviors::UpdateContext;
use crate::chunks::ChunkKey;

use super::WorldCore;

pub(super) fn process_chunk(world: &mut WorldCore, key: ChunkKey, go_right: bool) {
    let (start_x, start_y, end_x, end_y) =
        world.grid.chunks().chunk_bounds(key, world.grid.width(), world.grid.height());

    // Rows bottom to top so a falling particle lands in an already visited row.
    for y in (start_y..end_y).rev() {
        if go_right {
            for x in start_x..end_x {
                update_cell(world, x as i32, y as i32);
            }
        } else {
            for x in (start_x..end_x).rev() {
                update_cell(world, x as i32, y as i32);
            }
        }
    }
}

fn update_cell(world: &mut WorldCore, x: i32, y: i32) {
    if world.perf_enabled {
        world.perf_stats.cells_visited += 1;
    }
    if world.processed.is_marked(x, y) {
        return;
    }

    let idx = world.grid.index(x as u32, y as u32);
    let kind = world.grid.kinds()[idx];
    if kind.is_empty() {
        return;
    }
    if world.grid.is_settled(idx) {
        if world.perf_enabled {
            world.perf_stats.settled_skipped += 1;
        }
        return;
    }

    world.processed.mark(x, y);
    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        processed: &mut world.processed,
        rng: &mut world.rng,
        x,
        y,
        tick: world.tick,
        settle_threshold: world.settle_threshold,
        moves: 0,
    };
    world.behaviors.update(kind.behavior(), &mut ctx);

    if world.perf_enabled {
        let moves = ctx.moves;
        world.perf_stats.behaviors_invoked += 1;
        world.perf_stats.moves += moves;
    }
}
