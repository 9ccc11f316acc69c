use crate::store::EntityStore;
use crate::systems::forces::integrate_all;

use super::{pairs, PerfTimer, PhysicsWorld};

/// One fixed tick: integrate, rebuild the grid, then detect and resolve contacts.
pub(super) fn step(world: &mut PhysicsWorld, store: &mut EntityStore, dt: f32) {
    let perf_on = world.perf_enabled;
    world.stats.reset();
    let step_start = PerfTimer::start_if(perf_on);

    // === INTEGRATION (+ is_colliding reset) ===
    let t0 = PerfTimer::start_if(perf_on);
    integrate_all(store.slots_mut(), dt);
    if let Some(t0) = t0 {
        world.stats.integrate_ms = t0.elapsed_ms();
    }

    // === BROAD PHASE: rebuild the grid from scratch ===
    let t0 = PerfTimer::start_if(perf_on);
    if let Some(index) = world.index.as_mut() {
        index.clear();
        for (slot, e) in store.slots().iter().enumerate() {
            index.insert(slot, e);
        }
        world.stats.dropped_refs = index.dropped_refs() as u32;
    }
    if let Some(t0) = t0 {
        world.stats.broad_phase_ms = t0.elapsed_ms();
    }

    // === NARROW PHASE + RESPONSE ===
    let t0 = PerfTimer::start_if(perf_on);
    match world.index.as_ref() {
        Some(index) => pairs::process_indexed(
            index,
            store,
            world.config.max_query_results,
            &mut world.query_buffer,
            &mut world.stats,
        ),
        None => {
            world.stats.used_fallback = true;
            pairs::process_all_pairs(store, &mut world.stats);
        }
    }
    if let Some(t0) = t0 {
        world.stats.narrow_phase_ms = t0.elapsed_ms();
    }

    world.stats.active_entities = store.active_count() as u32;
    if world.stats.dropped_refs > 0 || world.stats.truncated_queries > 0 {
        log::debug!(
            "broad phase: {} cell references dropped (max_per_cell = {}), {} queries truncated (max_query_results = {})",
            world.stats.dropped_refs,
            world.config.max_per_cell,
            world.stats.truncated_queries,
            world.config.max_query_results
        );
    }

    if let Some(t) = step_start {
        world.stats.step_ms = t.elapsed_ms();
    }
}
