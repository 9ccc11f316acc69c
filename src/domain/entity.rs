use serde::{Deserialize, Serialize};

use crate::core::{math, Aabb, Vec2};

use super::layers::{layers_interact, LayerMask, LAYER_ALL};

/// Persistent entity identifier. Never reused, even when the slot is.
pub type EntityId = u32;

/// Collision geometry. Rects are always treated as axis-aligned by physics,
/// whatever the entity's visual rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl Shape {
    /// Half extents of the shape's bounding box.
    pub fn half_extents(&self) -> (f32, f32) {
        match *self {
            Shape::Circle { radius } => (radius, radius),
            Shape::Rect { width, height } => (width * 0.5, height * 0.5),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Rect { width: 0.0, height: 0.0 }
    }
}

/// Collider attached to an entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    /// Disabled colliders are skipped by the broad and narrow phase
    pub active: bool,
    pub shape: Shape,
    /// Local offset of the hitbox from the entity position
    pub offset: Vec2,
    /// What this entity is
    pub layer: LayerMask,
    /// What this entity collides with
    pub mask: LayerMask,
    /// Debug flag, reset at the start of every physics step
    pub is_colliding: bool,
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            active: true,
            shape: Shape::default(),
            offset: Vec2::zero(),
            layer: LAYER_ALL,
            mask: LAYER_ALL,
            is_colliding: false,
        }
    }
}

/// A simulated entity living in an [`EntityStore`](crate::store::EntityStore) slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    /// Gameplay tag bits, matched by `find_with_tag`
    pub tag: u32,
    /// Inactive entities are dead; their slot may be recycled
    pub active: bool,

    // === Transform ===
    pub pos: Vec2,
    /// Visual rotation (degrees). Ignored by collision.
    pub rotation: f32,
    pub scale: f32,

    // === Physics ===
    pub velocity: Vec2,
    /// 0 = static (infinite mass)
    pub mass: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Linear velocity decay per second
    pub friction: f32,

    pub collider: Collider,
}

impl Entity {
    /// Fresh entity with the allocation defaults.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: 0,
            active: true,
            pos: Vec2::zero(),
            rotation: 0.0,
            scale: 1.0,
            velocity: Vec2::zero(),
            mass: 1.0,
            restitution: 0.0,
            friction: 0.0,
            collider: Collider::default(),
        }
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        math::inverse_mass(self.mass)
    }

    /// World-space center of the collider.
    #[inline]
    pub fn collider_center(&self) -> Vec2 {
        self.pos + self.collider.offset
    }

    /// Bounding box of the collider in world space.
    pub fn aabb(&self) -> Aabb {
        let (hw, hh) = self.collider.shape.half_extents();
        Aabb::from_center(self.collider_center(), hw, hh)
    }

    /// Entity takes part in collision this step.
    #[inline]
    pub fn is_collidable(&self) -> bool {
        self.active && self.collider.active
    }

    /// Layer/mask compatibility in either direction.
    #[inline]
    pub fn layers_interact(&self, other: &Entity) -> bool {
        layers_interact(
            self.collider.layer,
            self.collider.mask,
            other.collider.layer,
            other.collider.mask,
        )
    }

    pub fn set_circle(&mut self, radius: f32) {
        self.collider.shape = Shape::Circle { radius };
    }

    pub fn set_rect(&mut self, width: f32, height: f32) {
        self.collider.shape = Shape::Rect { width, height };
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }
}
