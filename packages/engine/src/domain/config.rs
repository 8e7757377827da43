//! Engine configuration
//!
//! Loaded from JSON the same way content bundles are: `serde_json` into a
//! plain struct, then validated. Every field has a default, so `{}` is a
//! valid config.

use serde::{Deserialize, Serialize};

use super::palette::Palette;

pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_CELL_RADIUS: f64 = 2.0;
pub const DEFAULT_TICK_INTERVAL_MS: f64 = 500.0;
pub const DEFAULT_DENSITY: f64 = 0.15;

/// How the tick clock advances after a tick fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickPolicy {
    /// Restart the interval at the callback timestamp (drift tolerated)
    #[default]
    Reset,
    /// Carry leftover time into the next interval
    Accumulate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Corner radius of each painted cell
    pub cell_radius: f64,
    pub tick_interval_ms: f64,
    pub tick_policy: TickPolicy,
    /// Probability that a cell starts alive after a resize
    pub density: f64,
    pub palette: Palette,
    /// Fixed PRNG seed; `None` picks one from the host
    pub seed: Option<u32>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_radius: DEFAULT_CELL_RADIUS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tick_policy: TickPolicy::Reset,
            density: DEFAULT_DENSITY,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LifeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }
        if !self.cell_radius.is_finite() || self.cell_radius < 0.0 {
            return Err(format!("invalid cell_radius: {}", self.cell_radius));
        }
        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms < 0.0 {
            return Err(format!("invalid tick_interval_ms: {}", self.tick_interval_ms));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(format!("density must be within [0, 1], got {}", self.density));
        }
        Ok(())
    }
}
