use super::*;

impl CellGrid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[inline]
    pub fn same_shape(&self, other: &CellGrid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    // === Toroidal wrap ===
    /// Row above `row`, wrapping to the last row. Offsetting by `rows`
    /// before the modulo keeps the arithmetic unsigned.
    #[inline(always)]
    pub fn row_before(&self, row: usize) -> usize {
        (row + self.rows - 1) % self.rows
    }

    #[inline(always)]
    pub fn row_after(&self, row: usize) -> usize {
        (row + 1) % self.rows
    }

    #[inline(always)]
    pub fn col_before(&self, col: usize) -> usize {
        (col + self.cols - 1) % self.cols
    }

    #[inline(always)]
    pub fn col_after(&self, col: usize) -> usize {
        (col + 1) % self.cols
    }
}
