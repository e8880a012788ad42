use sandfall_engine::palette::is_color_of;
use sandfall_engine::{ElementKind, WorldCore};

fn count(world: &WorldCore, kind: ElementKind) -> usize {
    world.get_grid().iter().filter(|&&k| k == kind).count()
}

fn floor(world: &mut WorldCore, y: i32) {
    for x in 0..world.width() as i32 {
        world.set(x, y, ElementKind::Stone);
    }
}

#[test]
fn sand_falls_straight_onto_floor() {
    let mut world = WorldCore::new(10, 10, 5).unwrap();
    floor(&mut world, 9);
    world.set(5, 0, ElementKind::Sand);

    for _ in 0..9 {
        world.step();
    }

    assert_eq!(world.get(5, 8).kind, ElementKind::Sand);
    assert_eq!(count(&world, ElementKind::Sand), 1);

    for _ in 0..20 {
        world.step();
        assert_eq!(world.get(5, 8).kind, ElementKind::Sand);
    }
}

#[test]
fn liquid_on_single_row_spreads_sideways() {
    let mut world = WorldCore::new(20, 1, 5).unwrap();
    world.set(0, 0, ElementKind::Water);
    world.step();

    let x = world
        .get_grid()
        .iter()
        .position(|&k| k == ElementKind::Water)
        .unwrap();
    assert!(x > 0 && x <= 5, "water ended at {x}");

    for _ in 0..200 {
        world.step();
        assert_eq!(count(&world, ElementKind::Water), 1);
    }
}

#[test]
fn solid_sinks_through_liquid() {
    let mut world = WorldCore::new(5, 6, 4).unwrap();
    floor(&mut world, 5);
    for y in 3..5 {
        for x in 0..5 {
            world.set(x, y, ElementKind::Water);
        }
    }
    world.set(2, 2, ElementKind::Sand);

    for _ in 0..30 {
        world.step();
    }

    let idx = world
        .get_grid()
        .iter()
        .position(|&k| k == ElementKind::Sand)
        .unwrap();
    let y = idx / world.width() as usize;
    assert!(y >= 3, "sand stayed at row {y}");
    assert_eq!(count(&world, ElementKind::Water), 10);
}

#[test]
fn gas_rises_to_the_top_row() {
    let mut world = WorldCore::new(5, 10, 4).unwrap();
    world.set(2, 9, ElementKind::Steam);

    for _ in 0..30 {
        world.step();
    }

    let top_row = &world.get_grid()[..5];
    assert!(top_row.contains(&ElementKind::Steam));
    assert_eq!(count(&world, ElementKind::Steam), 1);
}

#[test]
fn resting_sand_stays_put() {
    let mut world = WorldCore::new(7, 5, 4).unwrap();
    floor(&mut world, 4);
    world.set(3, 3, ElementKind::Sand);

    for _ in 0..50 {
        world.step();
        assert_eq!(world.get(3, 3).kind, ElementKind::Sand);
    }
}

#[test]
fn sand_piles_into_a_heap() {
    let mut world = WorldCore::new(21, 12, 8).unwrap();
    floor(&mut world, 11);
    for _ in 0..60 {
        world.set(10, 0, ElementKind::Sand);
        world.step();
    }
    for _ in 0..200 {
        world.step();
    }

    assert_eq!(count(&world, ElementKind::Sand), 60);
    // A heap spreads beyond the drop column.
    assert!(!world.get(9, 10).kind.is_empty());
    assert!(!world.get(11, 10).kind.is_empty());
}

#[test]
fn out_of_range_access_is_absorbed() {
    let mut world = WorldCore::new(6, 4, 2).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 4), (i32::MIN, i32::MAX)] {
        assert!(world.get(x, y).kind.is_empty());
        assert!(!world.set(x, y, ElementKind::Sand));
        assert!(!world.move_cell(x, y, 0, 0));
        assert!(!world.move_cell(0, 0, x, y));
    }
    assert_eq!(world.pending_chunk_count(), 0);
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn move_onto_self_changes_nothing() {
    let mut world = WorldCore::new(4, 4, 2).unwrap();
    world.set(1, 1, ElementKind::Dirt);
    let before = world.get(1, 1);
    assert!(!world.move_cell(1, 1, 1, 1));
    assert_eq!(world.get(1, 1), before);
}

#[test]
fn set_updates_kind_and_colour() {
    let mut world = WorldCore::new(4, 4, 2).unwrap();
    for kind in ElementKind::ALL {
        world.set(2, 3, kind);
        let cell = world.get(2, 3);
        assert_eq!(cell.kind, kind);
        assert!(is_color_of(kind, world.get_color_buffer()[3 * 4 + 2]));
        assert_eq!(cell.color, world.get_color_buffer()[3 * 4 + 2]);
    }
}
