use serde::Serialize;

use super::SpatialIndex;

/// Occupancy snapshot of the grid (debug/profiling)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialStats {
    pub total_cells: usize,
    /// Cells holding at least one reference
    pub occupied_cells: usize,
    /// Entities inserted since the last clear
    pub total_entities: usize,
    /// Fullest cell
    pub max_per_cell: usize,
    /// Mean references per occupied cell
    pub avg_per_cell: f32,
    /// References dropped by full cells
    pub dropped_refs: usize,
}

impl SpatialIndex {
    pub fn stats(&self) -> SpatialStats {
        let mut stats = SpatialStats {
            total_cells: self.total_cells(),
            total_entities: self.total_entities,
            dropped_refs: self.cells.dropped(),
            ..SpatialStats::default()
        };

        let mut total_in_occupied = 0usize;
        for &c in self.cells.counts().iter() {
            let c = c as usize;
            if c > 0 {
                stats.occupied_cells += 1;
                total_in_occupied += c;
                stats.max_per_cell = stats.max_per_cell.max(c);
            }
        }
        if stats.occupied_cells > 0 {
            stats.avg_per_cell = total_in_occupied as f32 / stats.occupied_cells as f32;
        }
        stats
    }
}
