use super::*;
use crate::core::Vec2;

fn circle(id: u32, x: f32, y: f32, r: f32) -> Entity {
    let mut e = Entity::new(id);
    e.pos = Vec2::new(x, y);
    e.set_circle(r);
    e
}

#[test]
fn dimensions_round_up() {
    let grid = SpatialIndex::new(2000.0, 2000.0, 64.0).unwrap();
    assert_eq!(grid.cols(), 32);
    assert_eq!(grid.rows(), 32);
    assert_eq!(grid.stats().total_cells, 32 * 32);

    let grid = SpatialIndex::new(100.0, 50.0, 50.0).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (2, 1));
}

#[test]
fn invalid_config_is_rejected() {
    for (w, h, c) in [(800.0, 600.0, 0.0), (800.0, 600.0, -4.0), (0.0, 600.0, 32.0), (f32::NAN, 600.0, 32.0)] {
        let err = SpatialIndex::new(w, h, c).err().expect("must fail");
        assert!(matches!(err, PhysicsError::SpatialIndexCreationFailed { .. }));
    }
    assert!(SpatialIndex::with_cell_capacity(100.0, 100.0, 10.0, 0).is_err());
}

#[test]
fn spanning_entity_lands_in_every_cell_but_queries_once() {
    let mut grid = SpatialIndex::new(200.0, 200.0, 50.0).unwrap();
    // Straddles the corner shared by four cells
    let big = circle(1, 50.0, 50.0, 10.0);
    let probe = circle(2, 45.0, 45.0, 20.0);
    grid.insert(0, &big);
    grid.insert(1, &probe);

    let stats = grid.stats();
    assert_eq!(stats.total_entities, 2);
    assert_eq!(stats.occupied_cells, 4);
    assert_eq!(stats.max_per_cell, 2);

    assert_eq!(grid.query(1, &probe, 16), vec![0]);
}

#[test]
fn query_excludes_self_and_distant_entities() {
    let mut grid = SpatialIndex::new(400.0, 400.0, 40.0).unwrap();
    let a = circle(1, 20.0, 20.0, 5.0);
    let b = circle(2, 30.0, 25.0, 5.0);
    let far = circle(3, 380.0, 380.0, 5.0);
    grid.insert(0, &a);
    grid.insert(1, &b);
    grid.insert(2, &far);

    assert_eq!(grid.query(0, &a, 16), vec![1]);
    assert!(grid.query(2, &far, 16).is_empty());
}

#[test]
fn query_caps_results() {
    let mut grid = SpatialIndex::new(100.0, 100.0, 100.0).unwrap();
    let probe = circle(100, 50.0, 50.0, 5.0);
    for slot in 0..10 {
        grid.insert(slot, &circle(slot as u32 + 1, 50.0, 50.0, 5.0));
    }
    assert_eq!(grid.query(99, &probe, 4).len(), 4);
    assert!(grid.query(99, &probe, 0).is_empty());
}

#[test]
fn inactive_and_disabled_entities_are_not_inserted() {
    let mut grid = SpatialIndex::new(100.0, 100.0, 10.0).unwrap();
    let mut dead = circle(1, 5.0, 5.0, 1.0);
    dead.active = false;
    let mut ghost = circle(2, 5.0, 5.0, 1.0);
    ghost.collider.active = false;
    grid.insert(0, &dead);
    grid.insert(1, &ghost);
    assert_eq!(grid.stats().total_entities, 0);
    assert_eq!(grid.stats().occupied_cells, 0);
}

#[test]
fn out_of_world_positions_clamp_to_border_cells() {
    let mut grid = SpatialIndex::new(100.0, 100.0, 10.0).unwrap();
    let left = circle(1, -50.0, 50.0, 2.0);
    let also_left = circle(2, -80.0, 51.0, 2.0);
    grid.insert(0, &left);
    grid.insert(1, &also_left);
    assert_eq!(grid.cell_x(-50.0), 0);
    assert_eq!(grid.cell_x(1e9), 9);
    assert_eq!(grid.query(0, &left, 8), vec![1]);
}

#[test]
fn per_cell_overflow_is_counted() {
    let mut grid = SpatialIndex::with_cell_capacity(100.0, 100.0, 100.0, 3).unwrap();
    for slot in 0..5 {
        grid.insert(slot, &circle(slot as u32 + 1, 50.0, 50.0, 1.0));
    }
    let stats = grid.stats();
    assert_eq!(stats.max_per_cell, 3);
    assert_eq!(stats.dropped_refs, 2);

    grid.clear();
    assert_eq!(grid.stats(), SpatialStats { total_cells: 1, ..SpatialStats::default() });
}

#[test]
fn rebuild_is_deterministic() {
    let entities: Vec<Entity> = (0..50)
        .map(|i| circle(i + 1, (i * 37 % 300) as f32, (i * 53 % 300) as f32, 12.0))
        .collect();
    let mut grid = SpatialIndex::new(300.0, 300.0, 32.0).unwrap();
    let probe = 7;

    let mut results = Vec::new();
    for _ in 0..2 {
        grid.clear();
        for (slot, e) in entities.iter().enumerate() {
            grid.insert(slot, e);
        }
        results.push(grid.query(probe, &entities[probe], DEFAULT_MAX_QUERY_RESULTS));
    }
    assert_eq!(results[0], results[1]);
}

#[test]
fn filter_applies_before_the_cap() {
    let mut grid = SpatialIndex::new(100.0, 100.0, 100.0).unwrap();
    let probe = circle(1, 50.0, 50.0, 5.0);
    grid.insert(0, &probe);
    for slot in 1..10 {
        grid.insert(slot, &circle(slot as u32 + 1, 50.0, 50.0, 5.0));
    }

    let mut out = Vec::new();
    // Odd slots only: 1, 3, 5, 7, 9
    let truncated = grid.query_filtered(0, &probe, 5, &mut out, |s| s % 2 == 1);
    assert!(!truncated);
    assert_eq!(out, vec![1, 3, 5, 7, 9]);

    let truncated = grid.query_filtered(0, &probe, 3, &mut out, |s| s % 2 == 1);
    assert!(truncated);
    assert_eq!(out, vec![1, 3, 5]);
}

#[test]
fn capped_query_keeps_lowest_slots() {
    let mut grid = SpatialIndex::new(100.0, 100.0, 100.0).unwrap();
    let probe = circle(1, 50.0, 50.0, 5.0);
    // Inserted high to low so cell order is the reverse of slot order
    for slot in (1..8).rev() {
        grid.insert(slot, &circle(slot as u32 + 1, 50.0, 50.0, 5.0));
    }

    let mut out = Vec::new();
    assert!(grid.query_filtered(0, &probe, 3, &mut out, |_| true));
    out.sort_unstable();
    assert_eq!(out, vec![1, 2, 3]);

    // Next page
    assert!(grid.query_filtered(0, &probe, 3, &mut out, |s| s > 3));
    out.sort_unstable();
    assert_eq!(out, vec![4, 5, 6]);

    assert!(!grid.query_filtered(0, &probe, 3, &mut out, |s| s > 6));
    assert_eq!(out, vec![7]);
}
