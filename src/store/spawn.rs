use crate::core::{PhysicsError, Vec2};
use crate::domain::layers::{LAYER_ENEMY, LAYER_PLAYER, LAYER_WALL};
use crate::domain::{EntityDesc, EntityId, SceneBundle};

use super::EntityStore;

/// Wall thickness used by `spawn_world_bounds`
const BOUNDS_THICKNESS: f32 = 20.0;

/// Static axis-aligned wall centered at (x, y).
pub fn spawn_wall(store: &mut EntityStore, x: f32, y: f32, w: f32, h: f32) -> Result<EntityId, PhysicsError> {
    let e = store.allocate()?;
    e.pos = Vec2::new(x, y);
    e.mass = 0.0;
    e.restitution = 0.5;
    e.set_rect(w, h);
    e.collider.layer = LAYER_WALL;
    e.collider.mask = LAYER_PLAYER | LAYER_ENEMY;
    Ok(e.id)
}

/// Bouncy dynamic ball; heavier when bigger.
pub fn spawn_ball(store: &mut EntityStore, x: f32, y: f32, radius: f32) -> Result<EntityId, PhysicsError> {
    let e = store.allocate()?;
    e.pos = Vec2::new(x, y);
    e.mass = radius * 0.1;
    e.restitution = 0.9;
    e.set_circle(radius);
    e.collider.layer = LAYER_ENEMY;
    e.collider.mask = LAYER_ENEMY | LAYER_WALL;
    Ok(e.id)
}

/// Four walls enclosing `[0, width] x [0, height]`, returned top, bottom, left, right.
pub fn spawn_world_bounds(store: &mut EntityStore, width: f32, height: f32) -> Result<[EntityId; 4], PhysicsError> {
    let t = BOUNDS_THICKNESS;
    Ok([
        spawn_wall(store, width / 2.0, -t / 2.0, width + t * 2.0, t)?,
        spawn_wall(store, width / 2.0, height + t / 2.0, width + t * 2.0, t)?,
        spawn_wall(store, -t / 2.0, height / 2.0, t, height)?,
        spawn_wall(store, width + t / 2.0, height / 2.0, t, height)?,
    ])
}

pub fn spawn_from_desc(store: &mut EntityStore, desc: &EntityDesc) -> Result<EntityId, PhysicsError> {
    let e = store.allocate()?;
    desc.apply_to(e);
    Ok(e.id)
}

/// Spawn every entity of a bundle. Stops at the first failure; entities
/// spawned before it stay alive.
pub fn load_scene(store: &mut EntityStore, bundle: &SceneBundle) -> Result<Vec<EntityId>, PhysicsError> {
    let mut ids = Vec::with_capacity(bundle.entities.len());
    for desc in bundle.entities.iter() {
        ids.push(spawn_from_desc(store, desc)?);
    }
    Ok(ids)
}

pub fn load_scene_json(store: &mut EntityStore, json: &str) -> Result<Vec<EntityId>, PhysicsError> {
    let bundle = SceneBundle::from_json(json)?;
    load_scene(store, &bundle)
}
