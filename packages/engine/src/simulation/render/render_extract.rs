use crate::render::{self, CellLayout, Surface};

use super::LifeCore;

pub(super) fn paint(world: &mut LifeCore) {
    render::paint(
        world.store.current(),
        CellLayout::from_config(&world.config),
        &world.config.palette,
        world.surface_width,
        world.surface_height,
        &mut world.draw_list,
    );
}

pub(super) fn replay(world: &LifeCore, surface: &mut dyn Surface) -> Result<(), String> {
    render::replay(&world.draw_list, &world.config.palette, surface)
}

pub(super) fn instances_ptr(world: &LifeCore) -> *const f32 {
    world.draw_list.instances().as_ptr()
}

pub(super) fn instances_len(world: &LifeCore) -> usize {
    world.draw_list.instances().len()
}
