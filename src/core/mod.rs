//! Core - math primitives and error types shared by every system

pub mod aabb;
pub mod error;
pub mod math;
pub mod vec2;

pub use aabb::Aabb;
pub use error::PhysicsError;
pub use vec2::Vec2;
