//! Verdant Life Engine - Game of Life background animation in WASM
//!
//! Architecture:
//! - core/        - Cell buffers, double-buffered store, utilities
//! - domain/      - Life rule, palette, configuration
//! - render/      - Draw lists and the surfaces that execute them
//! - simulation/  - LifeCore context: tick clock, step, paint
//! - api/         - Public API (wasm facade, browser loop)

// Utils with macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod render;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Verdant Life engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::browser::{start, LoopHandle};
pub use api::wasm::{Life, PerfStats};
pub use crate::core::{CellGrid, GridStore};
pub use domain::{LifeConfig, Palette, TickPolicy};
pub use render::{DrawCommand, DrawList, Surface};
pub use simulation::{LifeCore, TickClock};
