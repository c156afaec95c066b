use crate::canvas::{Canvas, Palette};
use crate::grid::Grid;
use crate::input::Button;

/// Which pointer buttons are currently held over the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub drawing: bool,
    pub erasing: bool,
}

/// Turns pointer presses, drags and releases into cell edits.
///
/// The primary button paints live cells and the secondary button erases.
/// Each edited cell is reported to the canvas as a single pixel.
#[derive(Debug, Default)]
pub struct Editor {
    drag: DragState,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn press(
        &mut self,
        button: Button,
        x: u32,
        y: u32,
        grid: &mut Grid,
        palette: &Palette,
        canvas: &mut dyn Canvas,
    ) {
        match button {
            Button::Primary => {
                self.drag.drawing = true;
                paint(x, y, true, grid, palette, canvas);
            }
            Button::Secondary => {
                self.drag.erasing = true;
                paint(x, y, false, grid, palette, canvas);
            }
        }
    }

    pub fn release(&mut self, button: Button) {
        match button {
            Button::Primary => self.drag.drawing = false,
            Button::Secondary => self.drag.erasing = false,
        }
    }

    /// Extends any active trail to `(x, y)`. Only the visited cell is
    /// touched; gaps between samples are left alone.
    pub fn motion(
        &mut self,
        x: u32,
        y: u32,
        grid: &mut Grid,
        palette: &Palette,
        canvas: &mut dyn Canvas,
    ) {
        if self.drag.drawing {
            paint(x, y, true, grid, palette, canvas);
        }
        if self.drag.erasing {
            paint(x, y, false, grid, palette, canvas);
        }
    }
}

fn paint(x: u32, y: u32, alive: bool, grid: &mut Grid, palette: &Palette, canvas: &mut dyn Canvas) {
    grid.set(x, y, alive);
    canvas.draw_pixel(x, y, palette.cell(alive));
}
