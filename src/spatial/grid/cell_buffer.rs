// Fixed-capacity per-cell storage. One flat allocation made at creation,
// reused every step. Never grows.

use crate::core::PhysicsError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Slot references bucketed by cell, `per_cell` entries per bucket
pub struct CellBuffer {
    data: Vec<u32>,
    counts: Vec<u32>,
    per_cell: usize,
    dropped: usize,
}

impl CellBuffer {
    pub fn new(cell_count: usize, per_cell: usize) -> Result<Self, PhysicsError> {
        let total = cell_count
            .checked_mul(per_cell)
            .ok_or_else(|| PhysicsError::index_failed("cell storage size overflows usize"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(total)
            .map_err(|e| PhysicsError::index_failed(format!("cannot allocate {} cell entries: {}", total, e)))?;
        data.resize(total, 0);

        let mut counts = Vec::new();
        counts.try_reserve_exact(cell_count)
            .map_err(|e| PhysicsError::index_failed(format!("cannot allocate {} cells: {}", cell_count, e)))?;
        counts.resize(cell_count, 0);

        Ok(Self { data, counts, per_cell, dropped: 0 })
    }

    /// Append a slot to a cell. Drops silently (and counts the drop) when the cell is full.
    #[inline]
    pub fn push(&mut self, cell: usize, slot: u32) -> bool {
        let count = self.counts[cell] as usize;
        if count >= self.per_cell {
            self.dropped += 1;
            return false;
        }
        self.data[cell * self.per_cell + count] = slot;
        self.counts[cell] += 1;
        true
    }

    #[inline]
    pub fn cell(&self, cell: usize) -> &[u32] {
        let start = cell * self.per_cell;
        let len = self.counts[cell] as usize;
        &self.data[start..start + len]
    }

    /// Reset occupancy counts - memory stays allocated
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.counts.par_iter_mut().for_each(|c| *c = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.counts.fill(0);
        }
        self.dropped = 0;
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn per_cell(&self) -> usize {
        self.per_cell
    }

    /// References dropped since the last clear
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cell_drops_and_counts() {
        let mut buf = CellBuffer::new(2, 2).unwrap();
        assert!(buf.push(0, 7));
        assert!(buf.push(0, 8));
        assert!(!buf.push(0, 9));
        assert!(buf.push(1, 9));
        assert_eq!(buf.cell(0), &[7, 8]);
        assert_eq!(buf.cell(1), &[9]);
        assert_eq!(buf.dropped(), 1);

        buf.clear();
        assert!(buf.cell(0).is_empty());
        assert_eq!(buf.dropped(), 0);
    }

    #[test]
    fn absurd_size_fails_instead_of_aborting() {
        assert!(CellBuffer::new(usize::MAX / 2, 64).is_err());
    }
}
