//! SpatialIndex - uniform grid broad phase
//!
//! The world rectangle is cut into `cols x rows` square cells. Every step the
//! grid is cleared and refilled; an entity whose box spans several cells is
//! referenced from each of them. Cells have a fixed capacity: references past
//! it are dropped and counted (`SpatialStats::dropped_refs`), which can hide a
//! contact under extreme clustering. Raise `max_per_cell` if that shows up.

use crate::core::{Aabb, PhysicsError};
use crate::domain::Entity;

mod cell_buffer;
mod indexing;
mod query;
mod stats;

pub use cell_buffer::CellBuffer;
pub use stats::SpatialStats;

/// Default capacity of a single cell
pub const DEFAULT_MAX_PER_CELL: usize = 64;

/// Default cap on candidates returned by one query.
///
/// The physics step only asks for higher-id neighbours and pages through the
/// rest when a query is full, so the cap bounds the buffer, not the contacts.
/// Full queries are counted in `StepStats::truncated_queries`.
pub const DEFAULT_MAX_QUERY_RESULTS: usize = 128;

pub struct SpatialIndex {
    cols: usize,
    rows: usize,
    cell_size: f32,
    world_width: f32,
    world_height: f32,
    cells: CellBuffer,
    /// Entities inserted since the last clear
    total_entities: usize,
}

impl SpatialIndex {
    pub fn new(world_width: f32, world_height: f32, cell_size: f32) -> Result<Self, PhysicsError> {
        Self::with_cell_capacity(world_width, world_height, cell_size, DEFAULT_MAX_PER_CELL)
    }

    /// `cols = ceil(world_width / cell_size)`, `rows = ceil(world_height / cell_size)`.
    pub fn with_cell_capacity(
        world_width: f32,
        world_height: f32,
        cell_size: f32,
        max_per_cell: usize,
    ) -> Result<Self, PhysicsError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(PhysicsError::index_failed(format!("invalid cell size {}", cell_size)));
        }
        if !(world_width.is_finite() && world_width > 0.0 && world_height.is_finite() && world_height > 0.0) {
            return Err(PhysicsError::index_failed(format!(
                "invalid world size {}x{}",
                world_width, world_height
            )));
        }
        if max_per_cell == 0 || max_per_cell > u32::MAX as usize {
            return Err(PhysicsError::index_failed(format!("invalid per-cell capacity {}", max_per_cell)));
        }

        let cols_f = (world_width / cell_size).ceil();
        let rows_f = (world_height / cell_size).ceil();
        if cols_f > u32::MAX as f32 || rows_f > u32::MAX as f32 {
            return Err(PhysicsError::index_failed(format!("grid too large ({} x {} cells)", cols_f, rows_f)));
        }
        let cols = cols_f as usize;
        let rows = rows_f as usize;
        let cell_count = cols
            .checked_mul(rows)
            .ok_or_else(|| PhysicsError::index_failed("cell count overflows usize"))?;

        Ok(Self {
            cols,
            rows,
            cell_size,
            world_width,
            world_height,
            cells: CellBuffer::new(cell_count, max_per_cell)?,
            total_entities: 0,
        })
    }

    /// Reset every cell's occupancy. O(cells), no reallocation.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.total_entities = 0;
    }

    pub fn max_per_cell(&self) -> usize {
        self.cells.per_cell()
    }

    /// References dropped by full cells since the last clear
    pub fn dropped_refs(&self) -> usize {
        self.cells.dropped()
    }
}

#[cfg(test)]
mod tests;
