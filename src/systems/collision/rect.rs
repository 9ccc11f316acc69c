use crate::core::Vec2;

use super::types::Manifold;

/// Axis-aligned rect vs rect (centers + half extents).
///
/// Separates along the axis of least overlap; equal overlaps go to X.
pub fn rect_rect(a: Vec2, a_half: Vec2, b: Vec2, b_half: Vec2) -> Manifold {
    let d = b - a;
    let overlap_x = (a_half.x + b_half.x) - d.x.abs();
    let overlap_y = (a_half.y + b_half.y) - d.y.abs();

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return Manifold::MISS;
    }

    if overlap_y < overlap_x {
        let ny = if d.y < 0.0 { -1.0 } else { 1.0 };
        Manifold::contact(Vec2::new(0.0, ny), overlap_y)
    } else {
        let nx = if d.x < 0.0 { -1.0 } else { 1.0 };
        Manifold::contact(Vec2::new(nx, 0.0), overlap_x)
    }
}
