//! GridStore - the current/next buffer pair
//!
//! Both buffers always share the same shape. A step borrows them through
//! `split_mut`, and the borrow must end before `swap`, so nothing can keep a
//! reference to "current" across a generation boundary.

use super::grid::{CellGrid, ALIVE, DEAD};
use super::utils::random::RandomSource;

#[derive(Clone, Debug)]
pub struct GridStore {
    current: CellGrid,
    next: CellGrid,
}

impl GridStore {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            current: CellGrid::new(rows, cols),
            next: CellGrid::new(rows, cols),
        }
    }

    /// Replace both buffers with fresh all-dead `rows x cols` grids.
    /// Prior state is discarded.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.current = CellGrid::new(rows, cols);
        self.next = CellGrid::new(rows, cols);
    }

    /// Make each current cell alive with probability `density`.
    ///
    /// A cell is alive when a uniform draw exceeds `1 - density`, so the
    /// default density of 0.15 keeps cells whose draw is above 0.85. The
    /// comparison is `1 - draw < density`: `1 - draw` is exact for draws in
    /// [0.5, 1), whereas `1.0 - 0.15` rounds one ulp above 0.85.
    pub fn randomize(&mut self, density: f64, rng: &mut dyn RandomSource) {
        let density = density.clamp(0.0, 1.0);
        for cell in self.current.cells_mut() {
            *cell = if 1.0 - rng.next_f64() < density { ALIVE } else { DEAD };
        }
    }

    /// Exchange the roles of current and next. O(1), no cell is copied.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    #[inline]
    pub fn current(&self) -> &CellGrid {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut CellGrid {
        &mut self.current
    }

    /// Borrow current for reading and next for writing at the same time.
    #[inline]
    pub fn split_mut(&mut self) -> (&CellGrid, &mut CellGrid) {
        (&self.current, &mut self.next)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.current.cols()
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::random::XorShift32;

    /// Returns a fixed sequence of draws, cycling.
    struct Scripted {
        values: Vec<f64>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn resize_allocates_dead_buffers_of_same_shape() {
        let mut store = GridStore::new(2, 2);
        store.current_mut().set(0, 0, true);

        store.resize(5, 7);
        assert_eq!((store.rows(), store.cols()), (5, 7));
        assert_eq!(store.current().live_count(), 0);
        let (current, next) = store.split_mut();
        assert!(current.same_shape(next));
    }

    #[test]
    fn randomize_uses_strict_threshold() {
        let mut store = GridStore::new(1, 4);
        let mut rng = Scripted {
            values: vec![0.85, 0.86, 0.10, 0.99],
            pos: 0,
        };
        store.randomize(0.15, &mut rng);
        assert_eq!(store.current().cells(), &[0, 1, 0, 1]);
    }

    #[test]
    fn randomize_boundary_matches_literal_threshold() {
        let just_above = f64::from_bits(0.85f64.to_bits() + 1);
        let mut store = GridStore::new(1, 3);
        let mut rng = Scripted {
            values: vec![0.85, just_above, 0.8499999999999999],
            pos: 0,
        };
        store.randomize(0.15, &mut rng);
        assert_eq!(store.current().cells(), &[0, 1, 0]);
    }

    #[test]
    fn randomize_density_bounds() {
        let mut rng = XorShift32::new(3);
        let mut store = GridStore::new(20, 20);

        store.randomize(0.0, &mut rng);
        assert_eq!(store.current().live_count(), 0);

        store.randomize(1.0, &mut rng);
        // Only an exact 0.0 draw could stay dead.
        assert!(store.current().live_count() >= 399);
    }

    #[test]
    fn randomize_is_reproducible_with_seed() {
        let mut a = GridStore::new(30, 40);
        let mut b = GridStore::new(30, 40);
        a.randomize(0.15, &mut XorShift32::new(42));
        b.randomize(0.15, &mut XorShift32::new(42));
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn swap_exchanges_roles_not_contents() {
        let mut store = GridStore::new(3, 3);
        {
            let (_, next) = store.split_mut();
            next.set(1, 1, true);
        }
        let next_ptr = store.split_mut().1.cells_ptr();

        store.swap();

        // The buffer written as "next" is now read as "current".
        assert!(store.current().is_alive(1, 1));
        assert_eq!(store.current().cells_ptr(), next_ptr);
        assert_eq!(store.split_mut().1.live_count(), 0);
    }

    #[test]
    fn zero_sized_store_randomizes_without_drawing() {
        let mut store = GridStore::new(0, 0);
        let mut rng = Scripted { values: vec![], pos: 0 };
        // Would panic on modulo-by-zero if any draw were taken.
        store.randomize(0.15, &mut rng);
        store.swap();
        assert!(store.current().is_empty());
    }
}
