use super::*;

impl CellGrid {
    /// # Panics
    /// If (row, col) is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.checked_index(row, col)]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != DEAD
    }

    /// # Panics
    /// If (row, col) is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.checked_index(row, col);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
    }

    /// Read without bounds checks in release builds.
    ///
    /// # Safety
    /// `row < self.rows()` and `col < self.cols()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> u8 {
        *fast!(self.cells, [self.index(row, col)])
    }

    /// Write without bounds checks in release builds.
    ///
    /// # Safety
    /// `row < self.rows()` and `col < self.cols()`.
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        fast!(self.cells, [idx] = if alive { ALIVE } else { DEAD });
    }

    #[inline]
    fn checked_index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Checked write; returns false when (row, col) is outside the grid.
    pub fn try_set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        self.set(row, col, alive);
        true
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != DEAD).count()
    }

    /// Iterate `(row, col)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != DEAD)
            .map(move |(idx, _)| self.coords(idx))
    }
}
