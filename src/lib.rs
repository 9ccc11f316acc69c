//! Arena Physics - entity store and 2D collision engine
//!
//! Architecture:
//! - core/        - vector math, bounding boxes, errors
//! - domain/      - entity data model, collision layers, scene bundles
//! - store/       - slot-recycling entity arena and spawners
//! - spatial/     - uniform-grid broad phase
//! - systems/     - integration, narrow phase, collision response
//! - simulation/  - PhysicsWorld step orchestration, stats, JS facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod store;
pub mod systems;

use wasm_bindgen::prelude::*;

// Thread pool setup for the parallel passes in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

pub use crate::core::{PhysicsError, Vec2};
pub use domain::{Collider, Entity, EntityId, SceneBundle, Shape};
pub use simulation::{
    physics_init, physics_shutdown, physics_update, PhysicsConfig, PhysicsWorld, Simulation, StepStats,
};
pub use spatial::{SpatialIndex, SpatialStats};
pub use store::{
    entity_alloc, entity_destroy, find_all_with_tag, find_entity_with_tag, get_entity_by_id, EntityStore,
};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("arena-physics {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
