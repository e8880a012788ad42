use sandfall_engine::{el_sand, el_water, World};

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64, 16).unwrap();
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.set(x, y, if x % 2 == 0 { el_sand() } else { el_water() });
        }
    }
    world.step();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.behaviors_invoked() > 0);
    assert_eq!(stats.particle_count(), 128 * 32);
    assert_eq!(world.particle_count(), 128 * 32);
    assert_eq!(world.get_color_buffer().len(), 128 * 64 * 4);
    assert!(!world.get_active_chunk_indices().is_empty());
}
