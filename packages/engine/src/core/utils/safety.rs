//! Release-mode unchecked indexing for the cell buffers
//!
//! `fast!` is only expanded inside `CellGrid::get_unchecked` and
//! `CellGrid::set_unchecked`, which the generation step calls with
//! coordinates it has already wrapped into range. Public accessors stay
//! bounds-checked in every build.
//!
//! - Debug: normal bounds-checked access (panics with a useful message)
//! - Release: `get_unchecked` / `get_unchecked_mut`
//!
//! ```rust
//! use verdant_life_engine::fast;
//!
//! let cells = vec![0u8, 1, 0, 1];
//! let alive = *fast!(cells, [3]);
//! assert_eq!(alive, 1);
//!
//! let mut next = vec![0u8; 4];
//! fast!(next, [1] = 1);
//! assert_eq!(next[1], 1);
//! ```

/// Index a slice with bounds checks in debug builds only.
///
/// The index must be in range. Expand it only inside an `unsafe fn` whose
/// safety contract guarantees that.
#[macro_export]
macro_rules! fast {
    // Read: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
