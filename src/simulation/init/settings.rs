use serde::{Deserialize, Serialize};

use crate::core::PhysicsError;
use crate::spatial::{DEFAULT_MAX_PER_CELL, DEFAULT_MAX_QUERY_RESULTS};

/// Broad-phase configuration, loadable from JSON:
///
/// ```json
/// { "worldWidth": 2000, "worldHeight": 2000, "cellSize": 64, "maxPerCell": 64 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub cell_size: f32,
    /// Fixed capacity of one grid cell; extra references are dropped
    /// (`dropped_refs`) and their contacts can be missed
    pub max_per_cell: usize,
    /// Candidates gathered per grid query. Larger neighbourhoods are paged
    /// through in several queries (`truncated_queries`); no contact is lost
    pub max_query_results: usize,
}

impl PhysicsConfig {
    pub fn new(world_width: f32, world_height: f32, cell_size: f32) -> Self {
        Self {
            world_width,
            world_height,
            cell_size,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_width: 2000.0,
            world_height: 2000.0,
            cell_size: 64.0,
            max_per_cell: DEFAULT_MAX_PER_CELL,
            max_query_results: DEFAULT_MAX_QUERY_RESULTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PhysicsConfig::from_json(r#"{"worldWidth":800,"cellSize":32}"#).unwrap();
        assert_eq!(cfg.world_width, 800.0);
        assert_eq!(cfg.world_height, 2000.0);
        assert_eq!(cfg.cell_size, 32.0);
        assert_eq!(cfg.max_per_cell, DEFAULT_MAX_PER_CELL);
        assert_eq!(cfg.max_query_results, DEFAULT_MAX_QUERY_RESULTS);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(PhysicsConfig::from_json("[1,2"), Err(PhysicsError::Json(_))));
    }
}
