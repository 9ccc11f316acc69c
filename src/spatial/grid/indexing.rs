use super::*;

impl SpatialIndex {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn total_cells(&self) -> usize { self.cols * self.rows }

    #[inline]
    pub fn world_size(&self) -> (f32, f32) { (self.world_width, self.world_height) }

    // === Coordinate mapping ===
    // World positions outside the grid clamp to the border cells, so
    // out-of-bounds entities still meet each other in the edge cells.

    #[inline]
    pub fn cell_x(&self, x: f32) -> usize {
        clamp_cell(x / self.cell_size, self.cols)
    }

    #[inline]
    pub fn cell_y(&self, y: f32) -> usize {
        clamp_cell(y / self.cell_size, self.rows)
    }

    #[inline]
    pub fn cell_index(&self, cx: usize, cy: usize) -> usize {
        debug_assert!(
            cx < self.cols && cy < self.rows,
            "cell_index: out of bounds ({}, {}) for {}x{} grid",
            cx,
            cy,
            self.cols,
            self.rows
        );
        cy * self.cols + cx
    }

    /// Inclusive cell range `(start_cx, start_cy, end_cx, end_cy)` covered by a box.
    #[inline]
    pub fn cell_range(&self, bounds: &Aabb) -> (usize, usize, usize, usize) {
        (
            self.cell_x(bounds.min.x),
            self.cell_y(bounds.min.y),
            self.cell_x(bounds.max.x),
            self.cell_y(bounds.max.y),
        )
    }
}

#[inline]
fn clamp_cell(scaled: f32, cells: usize) -> usize {
    // `as` saturates and maps NaN to 0
    let c = scaled as i64;
    c.clamp(0, cells as i64 - 1) as usize
}
