use crate::core::PhysicsError;
use crate::spatial::SpatialIndex;

use super::settings::PhysicsConfig;
use super::PhysicsWorld;

/// Replace the spatial index. On failure the world keeps running on the
/// O(n^2) fallback and the error is handed back to the caller.
pub(super) fn init_with_config(world: &mut PhysicsWorld, config: PhysicsConfig) -> Result<(), PhysicsError> {
    // Drop the old grid before allocating the new one
    world.index = None;
    world.config = config;

    let cfg = &world.config;
    match SpatialIndex::with_cell_capacity(cfg.world_width, cfg.world_height, cfg.cell_size, cfg.max_per_cell) {
        Ok(index) => {
            log::info!(
                "spatial grid initialized ({} cells, {:.0}x{:.0} world, {:.0} cell size)",
                index.total_cells(),
                cfg.world_width,
                cfg.world_height,
                cfg.cell_size
            );
            world.index = Some(index);
            Ok(())
        }
        Err(err) => {
            log::warn!("failed to create spatial index, using O(n^2) fallback: {}", err);
            Err(err)
        }
    }
}

pub(super) fn shutdown(world: &mut PhysicsWorld) {
    if world.index.take().is_some() {
        log::debug!("spatial grid released");
    }
}
