use wasm_bindgen::prelude::*;

use crate::core::PhysicsError;
use crate::domain::{Entity, EntityId};
use crate::store::{self, EntityStore};

use super::perf_stats::StepStats;
use super::settings::PhysicsConfig;
use super::PhysicsWorld;

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle bundling an entity store with its physics world.
/// Entity ids are never 0, so 0 never names a live entity on the JS side.
#[wasm_bindgen]
pub struct Simulation {
    store: EntityStore,
    physics: PhysicsWorld,
}

#[wasm_bindgen]
impl Simulation {
    /// World of `width x height` with a broad-phase grid of `cell_size` cells.
    /// Falls back to all-pairs testing if the grid cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self {
            store: EntityStore::new(),
            physics: PhysicsWorld::with_config(PhysicsConfig::new(width, height, cell_size)),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String, max_entities: usize) -> Result<Simulation, JsValue> {
        let config = PhysicsConfig::from_json(&json).map_err(to_js)?;
        Ok(Self {
            store: EntityStore::with_capacity(max_entities),
            physics: PhysicsWorld::with_config(config),
        })
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.physics.update(&mut self.store, dt);
    }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.store.active_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.store.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn has_spatial_index(&self) -> bool { self.physics.has_spatial_index() }

    // === SPAWN / DESTROY ===

    pub fn spawn_ball(&mut self, x: f32, y: f32, radius: f32) -> Result<u32, JsValue> {
        store::spawn_ball(&mut self.store, x, y, radius).map_err(to_js)
    }

    pub fn spawn_wall(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<u32, JsValue> {
        store::spawn_wall(&mut self.store, x, y, w, h).map_err(to_js)
    }

    /// Four walls around `[0, width] x [0, height]`: top, bottom, left, right
    pub fn spawn_world_bounds(&mut self, width: f32, height: f32) -> Result<Vec<u32>, JsValue> {
        let ids = store::spawn_world_bounds(&mut self.store, width, height).map_err(to_js)?;
        Ok(ids.to_vec())
    }

    /// Spawn every entity of a scene bundle; returns their ids in order.
    pub fn load_scene(&mut self, json: String) -> Result<Vec<u32>, JsValue> {
        store::load_scene_json(&mut self.store, &json).map_err(to_js)
    }

    pub fn destroy(&mut self, id: u32) -> bool {
        self.store.destroy(id)
    }

    /// Kill every entity
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // === ENTITY STATE ===

    pub fn exists(&self, id: u32) -> bool {
        self.store.get_by_id(id).is_some()
    }

    pub fn position_x(&self, id: u32) -> Option<f32> {
        self.entity(id).map(|e| e.pos.x)
    }

    pub fn position_y(&self, id: u32) -> Option<f32> {
        self.entity(id).map(|e| e.pos.y)
    }

    pub fn velocity_x(&self, id: u32) -> Option<f32> {
        self.entity(id).map(|e| e.velocity.x)
    }

    pub fn velocity_y(&self, id: u32) -> Option<f32> {
        self.entity(id).map(|e| e.velocity.y)
    }

    pub fn set_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        match self.store.get_by_id_mut(id) {
            Some(e) => {
                e.pos.x = x;
                e.pos.y = y;
                true
            }
            None => false,
        }
    }

    pub fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        match self.store.get_by_id_mut(id) {
            Some(e) => {
                e.velocity.x = vx;
                e.velocity.y = vy;
                true
            }
            None => false,
        }
    }

    /// Touched anything during the last step
    pub fn is_colliding(&self, id: u32) -> bool {
        self.entity(id).map_or(false, |e| e.collider.is_colliding)
    }

    /// Id of the first live entity whose tag shares a bit with `mask`, or 0
    pub fn find_with_tag(&self, mask: u32) -> u32 {
        self.store.find_with_tag(mask).map_or(0, |e| e.id)
    }

    // === METRICS ===

    /// Enable or disable per-step timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.physics.enable_perf_metrics(enabled);
    }

    /// Last step snapshot (timings are zero when perf is disabled)
    pub fn get_step_stats(&self) -> StepStats {
        self.physics.last_stats().clone()
    }

    pub fn stats_json(&self) -> Result<String, JsValue> {
        self.physics.stats_json().map_err(to_js)
    }
}

impl Simulation {
    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.store.get_by_id(id)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }
}
