use crate::core::Vec2;

use super::types::{Manifold, DEGENERATE_NORMAL};

/// Circle vs circle. Hit iff center distance < radius sum.
pub fn circle_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> Manifold {
    let delta = b - a;
    let dist_sq = delta.length_squared();
    let radius_sum = ra + rb;

    if dist_sq >= radius_sum * radius_sum {
        return Manifold::MISS;
    }

    let distance = dist_sq.sqrt();
    if distance == 0.0 {
        return Manifold::contact(DEGENERATE_NORMAL, radius_sum);
    }
    Manifold::contact(delta * (1.0 / distance), radius_sum - distance)
}
