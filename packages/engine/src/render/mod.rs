//! Render - draw instruction lists and the surfaces that execute them
//!
//! `paint` turns a generation into a `DrawList`; `replay` executes a list on
//! any `Surface`. The canvas surface is one implementation, tests use a
//! recording one.

mod draw_list;
mod paint;
pub mod canvas;

pub use draw_list::{DrawCommand, DrawList, INSTANCE_STRIDE};
pub use paint::{paint, CellLayout};

use crate::domain::palette::Palette;

/// The drawing primitives the engine needs from its host.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> Result<(), String>;
}

/// Execute `list` on `surface`, switching fill color only when it changes.
pub fn replay(list: &DrawList, palette: &Palette, surface: &mut dyn Surface) -> Result<(), String> {
    let mut active_color: Option<usize> = None;

    for command in list.commands() {
        match *command {
            DrawCommand::Clear { x, y, width, height } => {
                surface.clear(x, y, width, height);
            }
            DrawCommand::FillRoundedRect { x, y, width, height, radius, color } => {
                if active_color != Some(color) {
                    let css = palette
                        .color(color)
                        .ok_or_else(|| format!("palette has no color {}", color))?;
                    surface.set_fill_color(css);
                    active_color = Some(color);
                }
                surface.fill_rounded_rect(x, y, width, height, radius)?;
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;

    #[test]
    fn replay_sets_color_only_on_change() {
        let mut list = DrawList::default();
        list.clear_surface(30.0, 20.0);
        list.fill_cell(0.0, 0.0, 9.0, 2.0, 1);
        list.fill_cell(10.0, 0.0, 9.0, 2.0, 1);
        list.fill_cell(20.0, 0.0, 9.0, 2.0, 3);

        let mut surface = RecordingSurface::new(30.0, 20.0);
        replay(&list, &Palette::default(), &mut surface).unwrap();

        assert_eq!(
            surface.calls,
            vec![
                "clear 0 0 30 20",
                "fill #40c463",
                "rect 0 0 9 9 2",
                "rect 10 0 9 9 2",
                "fill #216e39",
                "rect 20 0 9 9 2",
            ]
        );
    }

    #[test]
    fn replay_reports_missing_palette_entry() {
        let mut list = DrawList::default();
        list.fill_cell(0.0, 0.0, 9.0, 2.0, 7);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        assert!(replay(&list, &Palette::default(), &mut surface).is_err());
    }
}
