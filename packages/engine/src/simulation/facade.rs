use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::config::LifeConfig;
use crate::render::canvas::Canvas2dSurface;

use super::perf_stats::PerfStats;
use super::LifeCore;

#[wasm_bindgen]
pub struct Life {
    core: LifeCore,
}

#[wasm_bindgen]
impl Life {
    /// Create an automaton for a `width x height` pixel surface, default config
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: LifeCore::new(width, height),
        }
    }

    /// Create with a JSON config (see `LifeConfig`). Missing fields take defaults.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: f64, height: f64, json: String) -> Result<Life, JsValue> {
        let config = LifeConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: LifeCore::with_config(config, width, height),
        })
    }

    /// Create with a fixed seed for reproducible runs
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f64, height: f64, seed: u32) -> Self {
        let config = LifeConfig {
            seed: Some(seed),
            ..LifeConfig::default()
        };
        Self {
            core: LifeCore::with_config(config, width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() as u32 }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() as u32 }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.core.live_cells() as u32 }

    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> f64 { self.core.tick_interval_ms() }

    #[wasm_bindgen(setter)]
    pub fn set_tick_interval_ms(&mut self, interval_ms: f64) {
        self.core.set_tick_interval_ms(interval_ms);
    }

    /// Host resize: grid is recreated and reseeded
    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.on_resize(width, height);
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    /// Call from `requestAnimationFrame`. Returns true when a new generation
    /// was computed and the draw list refreshed.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        self.core.frame(timestamp_ms)
    }

    /// Force one generation and repaint
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Number of commands in the current draw list (clear included)
    pub fn command_count(&self) -> usize {
        self.core.draw_list().commands().len()
    }

    /// Pointer to the instance buffer: `[x, y, size, color]` f32 per live cell
    pub fn instances_ptr(&self) -> *const f32 {
        self.core.instances_ptr()
    }

    /// Instance buffer length in f32 elements
    pub fn instances_len(&self) -> usize {
        self.core.instances_len()
    }

    /// Draw the current draw list onto a 2D canvas context
    pub fn paint_to(
        &self,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    ) -> Result<(), JsValue> {
        let mut surface = Canvas2dSurface::new(canvas, ctx);
        self.core
            .paint_to(&mut surface)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Life {
    pub fn core(&self) -> &LifeCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut LifeCore {
        &mut self.core
    }
}
