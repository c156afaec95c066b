use std::ops::Range;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::canvas::{Canvas, Color, Palette};
use crate::grid::Grid;

/// Renders the grid into a `pixels` frame buffer, one scaled block per cell.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    columns: Vec<Range<u32>>,
    rows: Vec<Range<u32>>,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, grid_width: u32, grid_height: u32, scale: f32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let width = crate::config::scaled(grid_width, scale);
        let height = crate::config::scaled(grid_height, scale);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            columns: (0..grid_width).map(|x| cell_span(x, scale, width)).collect(),
            rows: (0..grid_height).map(|y| cell_span(y, scale, height)).collect(),
        })
    }

    /// Pushes the frame buffer to the window.
    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn fill_cell(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let (Some(columns), Some(rows)) = (self.columns.get(x as usize), self.rows.get(y as usize)) else {
            return;
        };
        fill_block(self.pixels.frame_mut(), self.width, columns.clone(), rows.clone(), rgba);
    }
}

impl Canvas for GraphicsRenderer {
    fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.fill_cell(x, y, color.to_rgba());
    }

    fn redraw(&mut self, grid: &Grid, palette: &Palette) {
        let background = palette.background.to_rgba();
        let foreground = palette.foreground.to_rgba();

        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&background);
        }

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y) {
                    self.fill_cell(x, y, foreground);
                }
            }
        }
    }
}

/// Device pixels covered by cell `index` along one axis.
///
/// Cells start at `floor(index * scale)` and are never empty, even when the
/// scale is below one.
fn cell_span(index: u32, scale: f32, limit: u32) -> Range<u32> {
    let scale = f64::from(scale);
    let start = (f64::from(index) * scale).floor() as u32;
    let end = (f64::from(index + 1) * scale).floor() as u32;
    let start = start.min(limit.saturating_sub(1));
    start..end.max(start + 1).min(limit)
}

fn fill_block(frame: &mut [u8], width: u32, columns: Range<u32>, rows: Range<u32>, color: [u8; 4]) {
    for py in rows {
        let row_start = (py * width + columns.start) as usize * 4;
        let row_end = (py * width + columns.end) as usize * 4;
        if let Some(row) = frame.get_mut(row_start..row_end) {
            for pixel in row.chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }
}
