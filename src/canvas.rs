use crate::grid::Grid;

/// A packed `0xRRGGBBAA` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Splits the packed value into `[r, g, b, a]` component bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// The three colors a frame is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub ghost: Color,
}

impl Palette {
    /// Color a cell is displayed with when no overlay covers it.
    pub fn cell(&self, alive: bool) -> Color {
        if alive {
            self.foreground
        } else {
            self.background
        }
    }
}

/// Receiver of render notifications.
///
/// The simulation never touches pixels directly; it tells a canvas which
/// cell changed color or that the whole grid needs repainting.
pub trait Canvas {
    fn draw_pixel(&mut self, x: u32, y: u32, color: Color);
    fn redraw(&mut self, grid: &Grid, palette: &Palette);
}

#[cfg(test)]
pub mod recorder {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Note {
        Pixel(u32, u32, Color),
        Redraw,
    }

    /// Canvas double that remembers every notification it receives.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub notes: Vec<Note>,
    }

    impl Recorder {
        pub fn pixels(&self) -> Vec<(u32, u32, Color)> {
            self.notes
                .iter()
                .filter_map(|note| match *note {
                    Note::Pixel(x, y, color) => Some((x, y, color)),
                    Note::Redraw => None,
                })
                .collect()
        }

        pub fn redraws(&self) -> usize {
            self.notes.iter().filter(|note| **note == Note::Redraw).count()
        }

        pub fn take(&mut self) -> Vec<Note> {
            std::mem::take(&mut self.notes)
        }
    }

    impl Canvas for Recorder {
        fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
            self.notes.push(Note::Pixel(x, y, color));
        }

        fn redraw(&mut self, _grid: &Grid, _palette: &Palette) {
            self.notes.push(Note::Redraw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_big_endian() {
        assert_eq!(Color(0x4433_22FF).to_rgba(), [0x44, 0x33, 0x22, 0xFF]);
        assert_eq!(Color(0x0000_00FF).to_rgba(), [0, 0, 0, 255]);
    }

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(Color(0xFF).to_string(), "000000FF");
    }

    #[test]
    fn palette_picks_cell_color() {
        let palette = Palette {
            background: Color(1),
            foreground: Color(2),
            ghost: Color(3),
        };
        assert_eq!(palette.cell(true), Color(2));
        assert_eq!(palette.cell(false), Color(1));
    }
}
