//! Domain logic: the Life rule, coloring, and configuration

pub mod config;
pub mod palette;
pub mod rules;

pub use config::{LifeConfig, TickPolicy};
pub use palette::Palette;
