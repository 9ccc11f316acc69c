/// Move `from` toward `to` by at most `max_delta`, never overshooting.
#[inline]
pub fn move_toward(from: f32, to: f32, max_delta: f32) -> f32 {
    let diff = to - from;
    if diff > max_delta {
        from + max_delta
    } else if diff < -max_delta {
        from - max_delta
    } else {
        to
    }
}

/// Inverse mass; non-positive mass means static (infinite mass).
#[inline]
pub fn inverse_mass(mass: f32) -> f32 {
    if mass <= 0.0 {
        0.0
    } else {
        1.0 / mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_toward_clamps_to_target() {
        assert_eq!(move_toward(10.0, 0.0, 3.0), 7.0);
        assert_eq!(move_toward(-10.0, 0.0, 3.0), -7.0);
        assert_eq!(move_toward(1.0, 0.0, 3.0), 0.0);
        assert_eq!(move_toward(-1.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn zero_mass_is_static() {
        assert_eq!(inverse_mass(0.0), 0.0);
        assert_eq!(inverse_mass(4.0), 0.25);
    }
}
