//! PhysicsWorld - caller-owned physics context
//!
//! Owns the broad-phase grid, the step configuration and the last step's
//! stats. Entities live in an [`EntityStore`] passed to every `update`, so one
//! world can drive any store and several worlds can run side by side.
//!
//! Without a grid (never initialized, shut down, or grid creation failed) the
//! step falls back to testing all pairs. Results are the same, only slower.

use serde::Serialize;

use crate::core::PhysicsError;
use crate::spatial::{SpatialIndex, SpatialStats};
use crate::store::EntityStore;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/init.rs"]
mod init;
#[path = "step/pairs.rs"]
mod pairs;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::Simulation;
pub use perf_stats::StepStats;
pub use settings::PhysicsConfig;

use perf_timer::PerfTimer;

pub struct PhysicsWorld {
    index: Option<SpatialIndex>,
    config: PhysicsConfig,

    /// Reused candidate list for grid queries
    query_buffer: Vec<usize>,

    // Perf metrics
    perf_enabled: bool,
    stats: StepStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    step: &'a StepStats,
    spatial: Option<SpatialStats>,
}

impl PhysicsWorld {
    /// World without a grid. Call [`init`](Self::init) to enable the broad phase.
    pub fn new() -> Self {
        let config = PhysicsConfig::default();
        Self {
            index: None,
            query_buffer: Vec::with_capacity(config.max_query_results),
            config,
            perf_enabled: false,
            stats: StepStats::default(),
        }
    }

    /// Build a world and its grid in one go. A grid failure is logged and the
    /// world is returned in fallback mode.
    pub fn with_config(config: PhysicsConfig) -> Self {
        let mut world = Self::new();
        // Already logged; fallback mode is a valid state
        let _ = world.init_with_config(config);
        world
    }

    /// (Re)create the grid, discarding any previous one.
    pub fn init(&mut self, world_width: f32, world_height: f32, cell_size: f32) -> Result<(), PhysicsError> {
        let config = PhysicsConfig {
            world_width,
            world_height,
            cell_size,
            ..self.config.clone()
        };
        init::init_with_config(self, config)
    }

    pub fn init_with_config(&mut self, config: PhysicsConfig) -> Result<(), PhysicsError> {
        init::init_with_config(self, config)
    }

    /// Release the grid. Later updates use the fallback path.
    pub fn shutdown(&mut self) {
        init::shutdown(self);
    }

    /// Advance every entity in `store` by `dt` seconds.
    pub fn update(&mut self, store: &mut EntityStore, dt: f32) {
        step::step(self, store, dt);
    }

    pub fn has_spatial_index(&self) -> bool {
        self.index.is_some()
    }

    pub fn spatial_index(&self) -> Option<&SpatialIndex> {
        self.index.as_ref()
    }

    /// Grid occupancy as of the last rebuild
    pub fn spatial_stats(&self) -> Option<SpatialStats> {
        self.index.as_ref().map(SpatialIndex::stats)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Enable or disable step timings (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    pub fn perf_enabled(&self) -> bool {
        self.perf_enabled
    }

    pub fn last_stats(&self) -> &StepStats {
        &self.stats
    }

    /// Last step stats plus grid occupancy, as JSON.
    pub fn stats_json(&self) -> Result<String, PhysicsError> {
        let report = StatsReport {
            step: &self.stats,
            spatial: self.spatial_stats(),
        };
        Ok(serde_json::to_string(&report)?)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub fn physics_init(
    world: &mut PhysicsWorld,
    world_width: f32,
    world_height: f32,
    cell_size: f32,
) -> Result<(), PhysicsError> {
    world.init(world_width, world_height, cell_size)
}

pub fn physics_shutdown(world: &mut PhysicsWorld) {
    world.shutdown();
}

pub fn physics_update(world: &mut PhysicsWorld, store: &mut EntityStore, dt: f32) {
    world.update(store, dt);
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
