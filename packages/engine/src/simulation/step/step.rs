use crate::domain::rules;

use super::{timed, LifeCore};

pub(super) fn frame(world: &mut LifeCore, now_ms: f64) -> bool {
    if !world.clock.poll(now_ms) {
        return false;
    }
    tick(world);
    true
}

/// One generation plus repaint of the generation it produced.
pub(super) fn tick(world: &mut LifeCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }

    let (live, step_ms) = timed(perf_on, || advance(world));
    let ((), paint_ms) = timed(perf_on, || world.paint());

    if perf_on {
        world.perf_stats.step_ms = step_ms;
        world.perf_stats.paint_ms = paint_ms;
        world.perf_stats.generation = world.generation;
        world.perf_stats.live_cells = live as u32;
        world.perf_stats.grid_cells = world.store.current().size() as u32;
        world.perf_stats.draw_commands = world.draw_list.commands().len() as u32;
    }
}

/// Step and swap; returns the live count of the new generation.
pub(super) fn advance(world: &mut LifeCore) -> usize {
    // Borrows of both buffers end before the swap.
    let live = {
        let (current, next) = world.store.split_mut();
        rules::step(current, next)
    };
    world.store.swap();

    world.generation += 1;
    live
}
