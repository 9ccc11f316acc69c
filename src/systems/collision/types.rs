use crate::core::Vec2;

/// Result of a narrow-phase test between two shapes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Manifold {
    pub hit: bool,
    /// Unit normal pointing from the first shape to the second
    pub normal: Vec2,
    /// Penetration along `normal`
    pub depth: f32,
}

impl Manifold {
    pub const MISS: Manifold = Manifold {
        hit: false,
        normal: Vec2::zero(),
        depth: 0.0,
    };

    #[inline]
    pub fn contact(normal: Vec2, depth: f32) -> Self {
        Self { hit: true, normal, depth }
    }

    /// Same contact seen from the other shape
    #[inline]
    pub fn flipped(self) -> Self {
        Self { normal: -self.normal, ..self }
    }
}

/// Fallback direction for coincident centers
pub const DEGENERATE_NORMAL: Vec2 = Vec2::new(0.0, -1.0);
