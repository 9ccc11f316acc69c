//! Collision layers - `layer` says what an entity is, `mask` what it hits.

pub type LayerMask = u32;

pub const LAYER_NONE: LayerMask = 0;
pub const LAYER_PLAYER: LayerMask = 1 << 0;
pub const LAYER_ENEMY: LayerMask = 1 << 1;
pub const LAYER_WALL: LayerMask = 1 << 2;
pub const LAYER_ALL: LayerMask = u32::MAX;

/// Bidirectional layer check: either side may opt into the contact.
#[inline]
pub fn layers_interact(a_layer: LayerMask, a_mask: LayerMask, b_layer: LayerMask, b_mask: LayerMask) -> bool {
    (a_mask & b_layer) != 0 || (b_mask & a_layer) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sided_mask_is_enough() {
        assert!(layers_interact(LAYER_PLAYER, LAYER_WALL, LAYER_WALL, LAYER_NONE));
        assert!(layers_interact(LAYER_WALL, LAYER_NONE, LAYER_PLAYER, LAYER_WALL));
        assert!(!layers_interact(LAYER_PLAYER, LAYER_PLAYER, LAYER_ENEMY, LAYER_ENEMY));
    }
}
