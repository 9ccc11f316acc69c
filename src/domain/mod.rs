//! Domain - entity data model, collision layers and scene bundles

pub mod entity;
pub mod layers;
pub mod scene;

pub use entity::{Collider, Entity, EntityId, Shape};
pub use scene::{EntityDesc, SceneBundle};
