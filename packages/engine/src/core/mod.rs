//! Core storage: cell buffers, the double-buffered store, and utilities

// Macros must be declared first so the grid modules can use them.
#[macro_use]
pub mod utils;
pub mod grid;
pub mod grid_store;

pub use grid::CellGrid;
pub use grid_store::GridStore;
