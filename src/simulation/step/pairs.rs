// Pair loops shared by the grid path and the O(n^2) fallback.
//
// Both walk `a` in slot order and its partners in ascending slot order, and
// both go through `process_pair`, so they only differ in which partners are
// visited. Each unordered pair is handled once: only when `a.id < b.id`.

use crate::spatial::SpatialIndex;
use crate::store::EntityStore;
use crate::systems::{dispatch, resolve};

use super::StepStats;

pub(super) fn process_indexed(
    index: &SpatialIndex,
    store: &mut EntityStore,
    max_results: usize,
    candidates: &mut Vec<usize>,
    stats: &mut StepStats,
) {
    let max_results = max_results.max(1);
    for i in 0..store.count() {
        if !store.slots()[i].is_collidable() {
            continue;
        }

        // A full query returns its lowest slots; page through the rest so the
        // partners are still visited in ascending slot order
        let mut after: Option<usize> = None;
        let mut paged = false;
        loop {
            let slots = store.slots();
            let a = &slots[i];
            // Lower ids are handled from the other side; keep them out of the cap
            let truncated = index.query_filtered(i, a, max_results, candidates, |j| {
                slots[j].id > a.id && after.map_or(true, |last| j > last)
            });
            stats.candidates = stats.candidates.saturating_add(candidates.len() as u32);
            candidates.sort_unstable();

            for &j in candidates.iter() {
                process_pair(store, i, j, stats);
            }

            if !truncated {
                break;
            }
            paged = true;
            after = candidates.last().copied();
        }
        if paged {
            stats.truncated_queries = stats.truncated_queries.saturating_add(1);
        }
    }
}

pub(super) fn process_all_pairs(store: &mut EntityStore, stats: &mut StepStats) {
    let n = store.count();
    for i in 0..n {
        if !store.slots()[i].is_collidable() {
            continue;
        }
        for j in 0..n {
            if j == i {
                continue;
            }
            stats.candidates = stats.candidates.saturating_add(1);
            process_pair(store, i, j, stats);
        }
    }
}

#[inline]
fn process_pair(store: &mut EntityStore, i: usize, j: usize, stats: &mut StepStats) {
    let slots = store.slots();
    let (a, b) = (&slots[i], &slots[j]);
    if !b.is_collidable() || a.id >= b.id || !a.layers_interact(b) {
        return;
    }

    stats.pairs_tested = stats.pairs_tested.saturating_add(1);
    // Every shape test implies a strict box overlap
    if !a.aabb().overlaps(&b.aabb()) {
        return;
    }
    let manifold = dispatch(a, b);
    if !manifold.hit {
        return;
    }

    stats.contacts = stats.contacts.saturating_add(1);
    let (a, b) = store.pair_mut(i, j);
    a.collider.is_colliding = true;
    b.collider.is_colliding = true;
    resolve(a, b, &manifold);
}
