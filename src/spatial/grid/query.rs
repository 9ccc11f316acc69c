use super::*;

impl SpatialIndex {
    /// Insert the entity in `slot` into every cell its box overlaps.
    /// Inactive entities and disabled colliders are ignored.
    pub fn insert(&mut self, slot: usize, entity: &Entity) {
        if !entity.is_collidable() {
            return;
        }

        let (sx, sy, ex, ey) = self.cell_range(&entity.aabb());
        let slot = slot as u32;
        for cy in sy..=ey {
            for cx in sx..=ex {
                let idx = self.cell_index(cx, cy);
                self.cells.push(idx, slot);
            }
        }
        self.total_entities += 1;
    }

    /// Collect distinct neighbours of the entity in `slot` into `out`.
    ///
    /// The probe itself is excluded, entities seen in several cells are
    /// reported once, and at most `max_results` slots are written (the lowest
    /// ones when there are more). Returns the number of candidates.
    pub fn query_into(&self, slot: usize, entity: &Entity, max_results: usize, out: &mut Vec<usize>) -> usize {
        self.query_filtered(slot, entity, max_results, out, |_| true);
        out.len()
    }

    /// Like [`query_into`](Self::query_into), but only slots passing `accept`
    /// are collected. When more than `max_results` pass, the lowest slots are
    /// kept, so a caller can page through the rest by accepting only slots
    /// above the last one it saw.
    ///
    /// Returns true when an accepted neighbour was left out.
    pub fn query_filtered<F>(
        &self,
        slot: usize,
        entity: &Entity,
        max_results: usize,
        out: &mut Vec<usize>,
        mut accept: F,
    ) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        out.clear();
        let mut truncated = false;

        let (sx, sy, ex, ey) = self.cell_range(&entity.aabb());
        for cy in sy..=ey {
            for cx in sx..=ex {
                let idx = self.cell_index(cx, cy);
                for &candidate in self.cells.cell(idx) {
                    let candidate = candidate as usize;
                    if candidate == slot || out.contains(&candidate) || !accept(candidate) {
                        continue;
                    }
                    if out.len() < max_results {
                        out.push(candidate);
                        continue;
                    }

                    truncated = true;
                    // Full: swap out the highest slot if this one is lower
                    let highest = out.iter().enumerate().max_by_key(|&(_, &s)| s).map(|(pos, &s)| (pos, s));
                    if let Some((pos, highest)) = highest {
                        if candidate < highest {
                            out[pos] = candidate;
                        }
                    }
                }
            }
        }
        truncated
    }

    /// Allocating variant of [`query_into`](Self::query_into).
    pub fn query(&self, slot: usize, entity: &Entity, max_results: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(max_results.min(DEFAULT_MAX_QUERY_RESULTS));
        self.query_into(slot, entity, max_results, &mut out);
        out
    }
}
