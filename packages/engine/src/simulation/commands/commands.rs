use crate::core::utils::random::XorShift32;

use super::LifeCore;

/// Clamp a host-reported extent: negative or non-finite becomes 0.
pub(super) fn clamp_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Cells that fit along `extent` pixels, truncated toward zero.
pub(super) fn cells_along(extent: f64, cell_size: u32) -> usize {
    (clamp_extent(extent) / cell_size.max(1) as f64).floor() as usize
}

pub(super) fn resize(world: &mut LifeCore, width: f64, height: f64) {
    world.surface_width = clamp_extent(width);
    world.surface_height = clamp_extent(height);

    let rows = cells_along(height, world.config.cell_size);
    let cols = cells_along(width, world.config.cell_size);

    // Both buffers are replaced in one call, so a step never sees a
    // half-resized pair.
    world.store.resize(rows, cols);
    randomize(world);

    console_log!("life: resized to {}x{} cells", rows, cols);
}

pub(super) fn randomize(world: &mut LifeCore) {
    world.store.randomize(world.config.density, &mut *world.rng);
}

pub(super) fn reseed(world: &mut LifeCore, seed: u32) {
    world.rng = Box::new(XorShift32::new(seed));
    world.config.seed = Some(seed);
    randomize(world);
}
