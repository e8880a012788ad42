use tracing::trace;

use crate::chunks::ChunkKey;

use super::chunk_processing::process_chunk;
use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Everything marked since the last step; mutations from here on queue
    // work for the next one.
    let mut active = world.grid.chunks_mut().consume_active_set();
    let go_right = (world.tick & 1) == 0;

    if !active.is_empty() {
        order_chunks(&mut active, go_right);
        world.processed.clear();
        for &key in &active {
            process_chunk(world, key, go_right);
        }
    }

    world.tick += 1;

    trace!(
        tick = world.tick,
        active_chunks = active.len(),
        pending_chunks = world.grid.chunks().pending_count(),
        "step"
    );

    if perf_on {
        world.perf_stats.active_chunks = active.len() as u32;
        world.perf_stats.particle_count = world.grid.particle_count();
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

/// Bottom chunk row first (+y is down), columns in the tick's scan direction.
pub(super) fn order_chunks(keys: &mut [ChunkKey], go_right: bool) {
    keys.sort_unstable_by(|a, b| {
        let columns = if go_right { a.cx.cmp(&b.cx) } else { b.cx.cmp(&a.cx) };
        b.cy.cmp(&a.cy).then(columns)
    });
}
