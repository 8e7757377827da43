/// Floats per live cell in the instance buffer: x, y, size, color index
pub const INSTANCE_STRIDE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillRoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        /// Palette index
        color: usize,
    },
}

/// One frame of draw instructions.
///
/// Allocated once and reused: `reset` keeps capacity. Alongside the command
/// list it keeps a flat `f32` instance buffer so JS can read the frame
/// straight out of wasm memory without crossing the boundary per cell.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    instances: Vec<f32>,
}

impl DrawList {
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            commands: Vec::with_capacity(cells + 1),
            instances: Vec::with_capacity(cells * INSTANCE_STRIDE),
        }
    }

    pub fn reset(&mut self) {
        self.commands.clear();
        self.instances.clear();
    }

    pub fn clear_surface(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { x: 0.0, y: 0.0, width, height });
    }

    /// Square cell of edge `size` at (x, y).
    pub fn fill_cell(&mut self, x: f64, y: f64, size: f64, radius: f64, color: usize) {
        self.commands.push(DrawCommand::FillRoundedRect {
            x,
            y,
            width: size,
            height: size,
            radius,
            color,
        });
        self.instances
            .extend_from_slice(&[x as f32, y as f32, size as f32, color as f32]);
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    /// Number of cells drawn this frame
    pub fn cell_count(&self) -> usize {
        self.instances.len() / INSTANCE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
