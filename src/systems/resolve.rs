//! Collision response - linear only, two passes: separate, then bounce.

use crate::domain::Entity;

use super::collision::Manifold;

/// Push `a` and `b` apart and exchange a restitution impulse.
///
/// Separation: the full `depth` is split by inverse-mass share, so static
/// bodies never move and equal masses split evenly. Impulse: skipped when the
/// bodies already separate along the normal; otherwise
/// `j = -(1 + e) * v_rel.n / (inv_a + inv_b)` with `e = min(e_a, e_b)`.
pub fn resolve(a: &mut Entity, b: &mut Entity, m: &Manifold) {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let total_inv = inv_a + inv_b;

    // Both static
    if total_inv == 0.0 {
        return;
    }

    let move_per_inv_mass = m.depth / total_inv;
    a.pos -= m.normal * (move_per_inv_mass * inv_a);
    b.pos += m.normal * (move_per_inv_mass * inv_b);

    let rel_vel = b.velocity - a.velocity;
    let vel_along_normal = rel_vel.dot(m.normal);

    // Already moving apart
    if vel_along_normal > 0.0 {
        return;
    }

    let e = a.restitution.min(b.restitution);
    let j = -(1.0 + e) * vel_along_normal / total_inv;
    let impulse = m.normal * j;

    a.velocity -= impulse * inv_a;
    b.velocity += impulse * inv_b;
}
