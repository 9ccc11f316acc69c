use crate::core::Vec2;

use super::types::{Manifold, DEGENERATE_NORMAL};

/// Circle vs axis-aligned rect. The normal points from the circle to the rect.
///
/// A center strictly inside the rect is pushed out through the nearest face
/// (depth = radius + distance to that face, ties go to X). Only a center
/// sitting exactly on the rect center falls back to depth = radius along
/// `DEGENERATE_NORMAL`.
pub fn circle_rect(center: Vec2, radius: f32, rect: Vec2, half: Vec2) -> Manifold {
    let min = rect - half;
    let max = rect + half;

    let closest = Vec2::new(center.x.clamp(min.x, max.x), center.y.clamp(min.y, max.y));
    let d = closest - center;
    let dist_sq = d.length_squared();

    if dist_sq >= radius * radius {
        return Manifold::MISS;
    }

    if dist_sq > 0.0 {
        let distance = dist_sq.sqrt();
        return Manifold::contact(d * (1.0 / distance), radius - distance);
    }

    // Center inside (or on the border of) the rect
    if center == rect {
        return Manifold::contact(DEGENERATE_NORMAL, radius);
    }

    let to_left = center.x - min.x;
    let to_right = max.x - center.x;
    let to_top = center.y - min.y;
    let to_bottom = max.y - center.y;
    let gap_x = to_left.min(to_right);
    let gap_y = to_top.min(to_bottom);

    // Normal opposes the exit direction of the circle
    if gap_y < gap_x {
        let ny = if to_top < to_bottom { 1.0 } else { -1.0 };
        Manifold::contact(Vec2::new(0.0, ny), radius + gap_y)
    } else {
        let nx = if to_left < to_right { 1.0 } else { -1.0 };
        Manifold::contact(Vec2::new(nx, 0.0), radius + gap_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_left_of_rect() {
        let m = circle_rect(Vec2::new(0.0, 0.0), 10.0, Vec2::new(15.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(m.hit);
        assert_eq!(m.normal, Vec2::new(1.0, 0.0));
        assert!((m.depth - 5.0).abs() < 1e-5);
    }

    #[test]
    fn corner_contact_uses_closest_point() {
        // Closest point is the corner (10, 10); center at (13, 14) -> distance 5
        let m = circle_rect(Vec2::new(13.0, 14.0), 6.0, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(m.hit);
        assert!((m.depth - 1.0).abs() < 1e-5);
        assert!((m.normal.x + 0.6).abs() < 1e-5 && (m.normal.y + 0.8).abs() < 1e-5);
    }

    #[test]
    fn far_circle_misses() {
        let m = circle_rect(Vec2::new(100.0, 0.0), 5.0, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!m.hit);
    }

    #[test]
    fn center_on_rect_center_uses_fallback() {
        let m = circle_rect(Vec2::new(4.0, 4.0), 3.0, Vec2::new(4.0, 4.0), Vec2::new(10.0, 2.0));
        assert!(m.hit);
        assert_eq!(m.depth, 3.0);
        assert_eq!(m.normal, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn center_inside_exits_through_nearest_face() {
        // Near the right face of a tall wall: circle leaves toward +x
        let m = circle_rect(Vec2::new(3.0, 300.0), 20.0, Vec2::new(0.0, 300.0), Vec2::new(10.0, 300.0));
        assert!(m.hit);
        assert_eq!(m.normal, Vec2::new(-1.0, 0.0));
        assert!((m.depth - 27.0).abs() < 1e-4);

        // Near the top face: circle leaves toward -y
        let m = circle_rect(Vec2::new(0.0, -8.0), 2.0, Vec2::new(0.0, 0.0), Vec2::new(50.0, 10.0));
        assert_eq!(m.normal, Vec2::new(0.0, 1.0));
        assert!((m.depth - 4.0).abs() < 1e-5);
    }
}
