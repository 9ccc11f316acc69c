//! Scene bundles - initial entity values supplied by the authoring layer.
//!
//! ```json
//! { "formatVersion": 1,
//!   "entities": [
//!     { "x": 0, "y": 300, "mass": 0, "restitution": 0.5,
//!       "collider": { "shape": { "kind": "rect", "width": 20, "height": 600 } } },
//!     { "x": 5, "y": 300, "vx": -100, "restitution": 0.5,
//!       "collider": { "shape": { "kind": "circle", "radius": 20 } } }
//!   ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{PhysicsError, Vec2};

use super::entity::{Entity, Shape};
use super::layers::{LayerMask, LAYER_ALL};

pub const SCENE_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBundle {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub entities: Vec<EntityDesc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDesc {
    #[serde(default)]
    pub tag: u32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "one")]
    pub scale: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    #[serde(default = "one")]
    pub mass: f32,
    #[serde(default)]
    pub restitution: f32,
    #[serde(default)]
    pub friction: f32,
    #[serde(default)]
    pub collider: ColliderDesc,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColliderDesc {
    #[serde(default = "yes")]
    pub active: bool,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default = "all_layers")]
    pub layer: LayerMask,
    #[serde(default = "all_layers")]
    pub mask: LayerMask,
}

impl Default for ColliderDesc {
    fn default() -> Self {
        Self {
            active: true,
            shape: Shape::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            layer: LAYER_ALL,
            mask: LAYER_ALL,
        }
    }
}

fn default_format_version() -> u32 {
    SCENE_FORMAT_VERSION
}

fn one() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

fn all_layers() -> LayerMask {
    LAYER_ALL
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let bundle: SceneBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    fn validate(&self) -> Result<(), PhysicsError> {
        if self.format_version != SCENE_FORMAT_VERSION {
            return Err(PhysicsError::InvalidScene(format!(
                "unsupported format version: {}",
                self.format_version
            )));
        }
        for (idx, desc) in self.entities.iter().enumerate() {
            desc.validate()
                .map_err(|msg| PhysicsError::InvalidScene(format!("entity {}: {}", idx, msg)))?;
        }
        Ok(())
    }
}

impl EntityDesc {
    fn validate(&self) -> Result<(), String> {
        let numbers = [
            self.x,
            self.y,
            self.rotation,
            self.scale,
            self.vx,
            self.vy,
            self.mass,
            self.restitution,
            self.friction,
            self.collider.offset_x,
            self.collider.offset_y,
        ];
        if numbers.iter().any(|v| !v.is_finite()) {
            return Err("non-finite number".to_string());
        }
        if self.mass < 0.0 {
            return Err(format!("negative mass {}", self.mass));
        }
        if self.friction < 0.0 {
            return Err(format!("negative friction {}", self.friction));
        }
        match self.collider.shape {
            Shape::Circle { radius } if !(radius.is_finite() && radius >= 0.0) => {
                Err(format!("bad circle radius {}", radius))
            }
            Shape::Rect { width, height }
                if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) =>
            {
                Err(format!("bad rect size {}x{}", width, height))
            }
            _ => Ok(()),
        }
    }

    /// Copy the described values onto a freshly allocated entity.
    pub fn apply_to(&self, e: &mut Entity) {
        e.tag = self.tag;
        e.pos = Vec2::new(self.x, self.y);
        e.rotation = self.rotation;
        e.scale = self.scale;
        e.velocity = Vec2::new(self.vx, self.vy);
        e.mass = self.mass;
        e.set_restitution(self.restitution);
        e.friction = self.friction;
        e.collider.active = self.collider.active;
        e.collider.shape = self.collider.shape;
        e.collider.offset = Vec2::new(self.collider.offset_x, self.collider.offset_y);
        e.collider.layer = self.collider.layer;
        e.collider.mask = self.collider.mask;
    }
}
