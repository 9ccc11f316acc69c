//! Spatial partitioning for the collision broad phase.

pub mod grid;

pub use grid::{SpatialIndex, SpatialStats, DEFAULT_MAX_PER_CELL, DEFAULT_MAX_QUERY_RESULTS};
