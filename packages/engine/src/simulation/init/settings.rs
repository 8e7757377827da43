use super::perf_stats::PerfStats;
use super::LifeCore;

pub(super) fn set_tick_interval_ms(world: &mut LifeCore, interval_ms: f64) {
    world.clock.set_interval_ms(interval_ms);
    world.config.tick_interval_ms = world.clock.interval_ms();
}

pub(super) fn tick_interval_ms(world: &LifeCore) -> f64 {
    world.clock.interval_ms()
}

pub(super) fn enable_perf_metrics(world: &mut LifeCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &LifeCore) -> PerfStats {
    world.perf_stats.clone()
}
