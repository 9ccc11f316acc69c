//! Narrow phase - exact shape tests producing contact manifolds.
//!
//! Physics treats every rect as axis-aligned, whatever the entity's visual
//! rotation. Collider scale is not applied either; sizes are taken as stored.

mod circle;
mod circle_rect;
mod rect;
mod types;

pub use circle::circle_circle;
pub use circle_rect::circle_rect;
pub use rect::rect_rect;
pub use types::{Manifold, DEGENERATE_NORMAL};

use crate::core::Vec2;
use crate::domain::{Entity, Shape};

/// Route a pair of entities to the matching shape test.
/// The manifold normal always points from `a` to `b`.
pub fn dispatch(a: &Entity, b: &Entity) -> Manifold {
    let pa = a.collider_center();
    let pb = b.collider_center();

    match (a.collider.shape, b.collider.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => circle_circle(pa, ra, pb, rb),
        (Shape::Rect { width: wa, height: ha }, Shape::Rect { width: wb, height: hb }) => {
            rect_rect(pa, Vec2::new(wa * 0.5, ha * 0.5), pb, Vec2::new(wb * 0.5, hb * 0.5))
        }
        (Shape::Circle { radius }, Shape::Rect { width, height }) => {
            circle_rect(pa, radius, pb, Vec2::new(width * 0.5, height * 0.5))
        }
        (Shape::Rect { width, height }, Shape::Circle { radius }) => {
            // Computed circle -> rect, i.e. b -> a
            circle_rect(pb, radius, pa, Vec2::new(width * 0.5, height * 0.5)).flipped()
        }
    }
}
