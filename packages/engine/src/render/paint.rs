use crate::core::grid::CellGrid;
use crate::domain::config::LifeConfig;
use crate::domain::palette::Palette;
use crate::domain::rules::count_neighbors;

use super::DrawList;

/// Pixel geometry of one cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    pub cell_size: u32,
    pub radius: f64,
}

impl CellLayout {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            radius: config.cell_radius,
        }
    }

    /// Painted edge; one pixel is left as a gap between cells.
    #[inline]
    pub fn painted_size(&self) -> f64 {
        self.cell_size.saturating_sub(1) as f64
    }
}

/// Rebuild `out` for `grid`: clear the whole surface, then one rounded rect
/// per live cell colored by its neighbor count in `grid`.
pub fn paint(
    grid: &CellGrid,
    layout: CellLayout,
    palette: &Palette,
    surface_width: f64,
    surface_height: f64,
    out: &mut DrawList,
) {
    out.reset();
    out.clear_surface(surface_width, surface_height);

    let cell = layout.cell_size as f64;
    let size = layout.painted_size();
    for (row, col) in grid.live_cells() {
        let neighbors = count_neighbors(grid, row, col);
        out.fill_cell(
            col as f64 * cell,
            row as f64 * cell,
            size,
            layout.radius,
            palette.bucket(neighbors),
        );
    }
}
