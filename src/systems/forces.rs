use crate::core::math::move_toward;
use crate::domain::Entity;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Integrate one dynamic entity: position from velocity, then linear
/// friction pulling each velocity component toward zero by `friction * dt`.
#[inline]
pub fn integrate(e: &mut Entity, dt: f32) {
    if !e.active || e.is_static() {
        return;
    }

    e.pos += e.velocity * dt;

    let max_delta = e.friction * dt;
    e.velocity.x = move_toward(e.velocity.x, 0.0, max_delta);
    e.velocity.y = move_toward(e.velocity.y, 0.0, max_delta);
}

/// Integrate every slot and clear its `is_colliding` flag.
/// Per-entity independent, so the parallel and serial paths agree exactly.
pub fn integrate_all(entities: &mut [Entity], dt: f32) {
    #[cfg(feature = "parallel")]
    {
        entities.par_iter_mut().for_each(|e| {
            integrate(e, dt);
            e.collider.is_colliding = false;
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for e in entities.iter_mut() {
            integrate(e, dt);
            e.collider.is_colliding = false;
        }
    }
}
