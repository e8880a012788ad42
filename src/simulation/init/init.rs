use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::behaviors::BehaviorRegistry;
use crate::error::EngineError;
use crate::grid::{Grid, ProcessedMask};

use super::config::EngineConfig;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: EngineConfig) -> Result<WorldCore, EngineError> {
    config.validate()?;

    let grid = Grid::new(config.width, config.height, config.chunk_size);
    let (chunks_x, chunks_y) = grid.chunks().dimensions();
    debug!(
        width = config.width,
        height = config.height,
        chunk_size = config.chunk_size,
        chunks_x,
        chunks_y,
        seed = config.seed,
        "world created"
    );

    Ok(WorldCore {
        processed: ProcessedMask::new(config.width, config.height),
        grid,
        behaviors: BehaviorRegistry::new(),
        rng: ChaCha8Rng::seed_from_u64(config.seed),
        settle_threshold: config.settle_threshold,
        tick: 0,
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
    })
}
