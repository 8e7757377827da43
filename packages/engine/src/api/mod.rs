//! Public surface for JS: the `Life` handle and the self-driving browser loop

pub mod browser;

pub mod wasm {
    pub use crate::simulation::{Life, PerfStats};
}
