use crate::core::utils::random::{self, RandomSource};
use crate::core::GridStore;
use crate::domain::config::LifeConfig;
use crate::render::DrawList;

use super::perf_stats::PerfStats;
use super::{commands, LifeCore, TickClock};

pub(super) fn create_life_core(
    config: LifeConfig,
    width: f64,
    height: f64,
    rng: Option<Box<dyn RandomSource>>,
) -> LifeCore {
    let rng = rng.unwrap_or_else(|| random::default_source(config.seed));
    let clock = TickClock::new(config.tick_interval_ms, config.tick_policy);

    let mut world = LifeCore {
        config,
        store: GridStore::default(),
        clock,
        rng,
        draw_list: DrawList::default(),
        surface_width: 0.0,
        surface_height: 0.0,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    commands::resize(&mut world, width, height);
    world.draw_list = DrawList::with_capacity(world.store.current().size());
    world
}
