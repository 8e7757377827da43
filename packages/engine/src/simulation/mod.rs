//! LifeCore - the simulation context
//!
//! Owns everything one automaton needs: the buffer pair, configuration,
//! tick clock, randomness source, and the reusable draw list. The browser
//! loop holds one of these and calls `frame` on every animation callback;
//! no state lives at module level, so instances are independent.
//!
//! Per-frame flow: `TickClock::poll` -> `rules::step` -> `GridStore::swap`
//! -> `render::paint`.

use crate::core::utils::random::RandomSource;
use crate::core::GridStore;
use crate::domain::config::LifeConfig;
use crate::render::{DrawList, Surface};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "tick/tick_clock.rs"]
mod tick_clock;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Life;
pub use perf_stats::PerfStats;
pub use tick_clock::TickClock;

use perf_timer::timed;

/// One automaton instance
pub struct LifeCore {
    config: LifeConfig,
    store: GridStore,
    clock: TickClock,
    rng: Box<dyn RandomSource>,
    draw_list: DrawList,

    // Surface size in pixels, as last reported by the host
    surface_width: f64,
    surface_height: f64,

    // State
    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LifeCore {
    /// Engine with default config for a `width x height` pixel surface
    pub fn new(width: f64, height: f64) -> Self {
        init::create_life_core(LifeConfig::default(), width, height, None)
    }

    pub fn with_config(config: LifeConfig, width: f64, height: f64) -> Self {
        init::create_life_core(config, width, height, None)
    }

    /// Engine drawing from a caller-supplied randomness source
    pub fn with_random_source(
        config: LifeConfig,
        width: f64,
        height: f64,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        init::create_life_core(config, width, height, Some(rng))
    }

    pub fn config(&self) -> &LifeConfig { &self.config }

    pub fn store(&self) -> &GridStore { &self.store }

    /// Direct access to the buffers, for seeding known patterns.
    pub fn store_mut(&mut self) -> &mut GridStore { &mut self.store }

    pub fn rows(&self) -> usize { self.store.rows() }

    pub fn cols(&self) -> usize { self.store.cols() }

    pub fn generation(&self) -> u64 { self.generation }

    /// Live cells in the current generation, counted from the buffer.
    pub fn live_cells(&self) -> usize { self.store.current().live_count() }

    pub fn surface_size(&self) -> (f64, f64) { (self.surface_width, self.surface_height) }

    pub fn draw_list(&self) -> &DrawList { &self.draw_list }

    pub fn clock(&self) -> &TickClock { &self.clock }

    /// Host resize: recompute rows/cols, recreate and reseed the grid
    pub fn on_resize(&mut self, width: f64, height: f64) {
        commands::resize(self, width, height)
    }

    /// Re-randomize the current generation at the configured density
    pub fn randomize(&mut self) {
        commands::randomize(self)
    }

    /// Switch to a seeded xorshift source and re-randomize
    pub fn reseed(&mut self, seed: u32) {
        commands::reseed(self, seed)
    }

    /// Animation-frame callback. Runs at most one generation and repaints
    /// when the tick interval has elapsed; returns true if it did.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        step::frame(self, now_ms)
    }

    /// Force one generation and repaint, ignoring the clock
    pub fn step(&mut self) {
        step::tick(self)
    }

    /// Advance one generation without repainting; returns the new live count
    pub fn advance(&mut self) -> usize {
        step::advance(self)
    }

    /// Rebuild the draw list from the current generation
    pub fn paint(&mut self) {
        render_extract::paint(self)
    }

    /// Execute the current draw list on a surface
    pub fn paint_to(&self, surface: &mut dyn Surface) -> Result<(), String> {
        render_extract::replay(self, surface)
    }

    pub fn instances_ptr(&self) -> *const f32 {
        render_extract::instances_ptr(self)
    }

    pub fn instances_len(&self) -> usize {
        render_extract::instances_len(self)
    }

    pub fn set_tick_interval_ms(&mut self, interval_ms: f64) {
        settings::set_tick_interval_ms(self, interval_ms);
    }

    pub fn tick_interval_ms(&self) -> f64 {
        settings::tick_interval_ms(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
