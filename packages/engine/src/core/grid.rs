//! CellGrid - one generation of the automaton
//!
//! Row-major `Vec<u8>` of 0/1 flags. A `u8` instead of `bool` lets neighbor
//! counting sum cells directly without branching.

mod indexing;
mod accessors;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A `rows x cols` matrix of cell flags
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl CellGrid {
    /// All-dead grid. Zero rows or columns give an empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = rows.saturating_mul(cols);
        Self {
            rows,
            cols,
            cells: vec![DEAD; size],
        }
    }

    /// Build from rows of flags (any non-zero value is alive). Test/seed helper.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), cols, "ragged row {} in CellGrid::from_rows", r);
            for (c, &v) in line.iter().enumerate() {
                grid.set(r, c, v != DEAD);
            }
        }
        grid
    }

    /// Kill every cell, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Raw pointer to the cell flags (for JS-side inspection)
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }
}
