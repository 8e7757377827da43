//! Conway rules (B3/S23) on a toroidal grid

use crate::core::grid::{CellGrid, DEAD};

/// Live cells among the 8 toroidal neighbors of (row, col).
///
/// Edges wrap, so on grids with 2 or fewer rows/cols the same cell (or the
/// cell itself) may be counted more than once. Coordinates past the edge
/// wrap as well.
#[inline]
pub fn count_neighbors(grid: &CellGrid, row: usize, col: usize) -> u8 {
    if grid.is_empty() {
        return 0;
    }
    let row = row % grid.rows();
    let col = col % grid.cols();

    let rows = [grid.row_before(row), row, grid.row_after(row)];
    let cols = [grid.col_before(col), col, grid.col_after(col)];

    let mut count = 0u8;
    for (dr, &r) in rows.iter().enumerate() {
        for (dc, &c) in cols.iter().enumerate() {
            if dr == 1 && dc == 1 {
                continue;
            }
            // SAFETY: r and c come from the wrap helpers on in-range coordinates.
            count += unsafe { grid.get_unchecked(r, c) };
        }
    }
    count
}

/// Next state of one cell given its live-neighbor count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survives
        (false, 3) => true,            // born
        _ => false,
    }
}

/// Advance one generation: read `current`, write `next`.
///
/// `current` is never written, so every transition sees the untouched prior
/// generation. Returns the number of live cells in `next`.
///
/// # Panics
/// If the buffers differ in shape.
pub fn step(current: &CellGrid, next: &mut CellGrid) -> usize {
    assert!(
        current.same_shape(next),
        "step: buffer shape mismatch (current {}x{}, next {}x{})",
        current.rows(),
        current.cols(),
        next.rows(),
        next.cols()
    );

    let mut live = 0usize;
    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let neighbors = count_neighbors(current, row, col);
            // SAFETY: loop bounds are current's shape, which equals next's.
            let was_alive = unsafe { current.get_unchecked(row, col) } != DEAD;
            let alive = next_state(was_alive, neighbors);
            unsafe { next.set_unchecked(row, col, alive) };
            live += alive as usize;
        }
    }
    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridStore;

    fn advance(store: &mut GridStore) {
        let (current, next) = store.split_mut();
        step(current, next);
        store.swap();
    }

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> CellGrid {
        let mut grid = CellGrid::new(rows, cols);
        for &(r, c) in live {
            grid.set(r, c, true);
        }
        grid
    }

    fn store_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> GridStore {
        let mut store = GridStore::new(rows, cols);
        *store.current_mut() = grid_with(rows, cols, live);
        store
    }

    #[test]
    fn all_dead_3x3_has_no_neighbors() {
        let grid = CellGrid::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(count_neighbors(&grid, r, c), 0);
            }
        }
    }

    #[test]
    fn all_alive_3x3_counts_eight_everywhere() {
        let grid = CellGrid::from_rows(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(count_neighbors(&grid, r, c), 8, "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn corner_counts_wrap_around() {
        // Opposite corners of a 5x5 are toroidal neighbors.
        let grid = grid_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
    }

    #[test]
    fn single_cell_grid_counts_itself_eight_times() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 8);
    }

    #[test]
    fn one_row_grid_wraps_vertically_onto_itself() {
        // 1x3 with the middle cell alive: from (0,0) the column to the right
        // is seen three times (above, same row, below all wrap to row 0).
        let grid = grid_with(1, 3, &[(0, 1)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_neighbors(&grid, 0, 1), 2);
    }

    #[test]
    fn center_past_the_edge_wraps() {
        let grid = grid_with(4, 5, &[(0, 0), (3, 4), (1, 1)]);
        for r in 0..4 {
            for c in 0..5 {
                let expected = count_neighbors(&grid, r, c);
                assert_eq!(count_neighbors(&grid, r + 4, c), expected);
                assert_eq!(count_neighbors(&grid, r, c + 10), expected);
            }
        }
        assert_eq!(count_neighbors(&grid, usize::MAX, 0), count_neighbors(&grid, usize::MAX % 4, 0));
    }

    #[test]
    fn counts_are_symmetric_under_half_turn() {
        // Pattern symmetric under 180 degree rotation on a 6x7 torus.
        let rows = 6;
        let cols = 7;
        let live = [(0, 0), (5, 6), (1, 3), (4, 3), (2, 5), (3, 1)];
        let grid = grid_with(rows, cols, &live);
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(
                    count_neighbors(&grid, r, c),
                    count_neighbors(&grid, rows - 1 - r, cols - 1 - c),
                    "cell ({}, {})",
                    r,
                    c
                );
            }
        }
    }

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "survival with {}", n);
            assert_eq!(next_state(false, n), n == 3, "birth with {}", n);
        }
    }

    #[test]
    fn block_is_still_life() {
        for size in [4usize, 6, 9] {
            let mut store = store_with(size, size, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
            let before = store.current().clone();
            advance(&mut store);
            assert_eq!(store.current(), &before, "{}x{}", size, size);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut store = store_with(5, 5, &horizontal);
        let start = store.current().clone();

        advance(&mut store);
        assert_eq!(store.current(), &vertical);

        advance(&mut store);
        assert_eq!(store.current(), &start);
    }

    #[test]
    fn dead_cell_born_with_exactly_three() {
        let mut store = store_with(5, 5, &[(1, 1), (1, 2), (1, 3)]);
        advance(&mut store);
        assert!(store.current().is_alive(2, 2));

        // Two neighbors: stays dead
        let mut store = store_with(5, 5, &[(1, 1), (1, 3)]);
        advance(&mut store);
        assert!(!store.current().is_alive(2, 2));

        // Four neighbors: stays dead
        let mut store = store_with(5, 5, &[(1, 1), (1, 3), (3, 1), (3, 3)]);
        advance(&mut store);
        assert!(!store.current().is_alive(2, 2));
    }

    #[test]
    fn live_cell_survival_depends_on_count() {
        let around = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        for n in 0..=8usize {
            let mut live = vec![(2, 2)];
            live.extend_from_slice(&around[..n]);
            let grid = grid_with(7, 7, &live);
            assert_eq!(count_neighbors(&grid, 2, 2) as usize, n);

            let mut next = CellGrid::new(7, 7);
            step(&grid, &mut next);
            assert_eq!(next.is_alive(2, 2), n == 2 || n == 3, "center with {} neighbors", n);
        }
    }

    #[test]
    fn step_does_not_touch_current() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let snapshot = grid.clone();
        let mut next = CellGrid::new(5, 5);
        let live = step(&grid, &mut next);
        assert_eq!(grid, snapshot);
        assert_eq!(live, 3);
    }

    #[test]
    fn step_on_empty_grid_is_noop() {
        let mut store = GridStore::new(0, 0);
        advance(&mut store);
        assert!(store.current().is_empty());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn step_rejects_mismatched_buffers() {
        let current = CellGrid::new(3, 3);
        let mut next = CellGrid::new(3, 4);
        step(&current, &mut next);
    }
}
