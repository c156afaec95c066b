use crate::canvas::{Canvas, Palette};
use crate::grid::Grid;

/// Preview pixel that follows the pointer while the simulation is paused.
///
/// The ghost never changes the grid. It remembers the cell it was last
/// drawn over, and whether that cell was alive, so the true color can be
/// put back when the pointer moves on or leaves the window.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GhostCursor {
    x: u32,
    y: u32,
    prev_x: u32,
    prev_y: u32,
    prev_alive: bool,
    active: bool,
}

impl GhostCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[cfg(test)]
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Runs once per paused frame with the pointer's grid coordinate.
    pub fn update(&mut self, pointer: (u32, u32), grid: &Grid, palette: &Palette, canvas: &mut dyn Canvas) {
        if !self.active {
            self.restore(palette, canvas);
            return;
        }

        (self.x, self.y) = pointer;

        // Live cells keep their foreground color.
        if !grid.get(self.x, self.y) {
            canvas.draw_pixel(self.x, self.y, palette.ghost);
        }

        if (self.x, self.y) != (self.prev_x, self.prev_y) {
            self.restore(palette, canvas);
        }

        self.prev_x = self.x;
        self.prev_y = self.y;
        self.prev_alive = grid.get(self.x, self.y);
    }

    fn restore(&self, palette: &Palette, canvas: &mut dyn Canvas) {
        canvas.draw_pixel(self.prev_x, self.prev_y, palette.cell(self.prev_alive));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recorder::Recorder;
    use crate::canvas::Color;

    const PALETTE: Palette = Palette {
        background: Color(0x0000_00FF),
        foreground: Color(0xFFFF_FFFF),
        ghost: Color(0x4444_44FF),
    };

    fn active_ghost() -> GhostCursor {
        let mut ghost = GhostCursor::new();
        ghost.set_active(true);
        ghost
    }

    #[test]
    fn draws_over_dead_cell() {
        let grid = Grid::new(4, 4);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((0, 0), &grid, &PALETTE, &mut canvas);

        assert_eq!(canvas.pixels(), vec![(0, 0, PALETTE.ghost)]);
        assert_eq!(ghost.position(), (0, 0));
    }

    #[test]
    fn never_covers_live_cell() {
        let mut grid = Grid::new(4, 4);
        grid.set(2, 2, true);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((2, 2), &grid, &PALETTE, &mut canvas);
        ghost.update((2, 2), &grid, &PALETTE, &mut canvas);

        assert!(canvas
            .pixels()
            .iter()
            .all(|&(x, y, color)| !((x, y) == (2, 2) && color == PALETTE.ghost)));
    }

    #[test]
    fn moving_restores_previous_cell() {
        let mut grid = Grid::new(4, 4);
        grid.set(3, 3, true);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((1, 1), &grid, &PALETTE, &mut canvas);
        canvas.take();
        ghost.update((1, 2), &grid, &PALETTE, &mut canvas);

        assert_eq!(
            canvas.pixels(),
            vec![(1, 2, PALETTE.ghost), (1, 1, PALETTE.background)]
        );

        canvas.take();
        ghost.update((3, 3), &grid, &PALETTE, &mut canvas);
        canvas.take();
        ghost.update((0, 3), &grid, &PALETTE, &mut canvas);

        // The live cell it left gets its foreground color back.
        assert_eq!(
            canvas.pixels(),
            vec![(0, 3, PALETTE.ghost), (3, 3, PALETTE.foreground)]
        );
    }

    #[test]
    fn standing_still_does_not_restore() {
        let grid = Grid::new(4, 4);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((2, 1), &grid, &PALETTE, &mut canvas);
        canvas.take();
        ghost.update((2, 1), &grid, &PALETTE, &mut canvas);

        assert_eq!(canvas.pixels(), vec![(2, 1, PALETTE.ghost)]);
    }

    #[test]
    fn inactive_restores_and_stops() {
        let grid = Grid::new(4, 4);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((3, 0), &grid, &PALETTE, &mut canvas);
        ghost.set_active(false);
        canvas.take();
        ghost.update((1, 1), &grid, &PALETTE, &mut canvas);

        assert_eq!(canvas.pixels(), vec![(3, 0, PALETTE.background)]);
        assert_eq!(ghost.position(), (3, 0));
    }

    #[test]
    fn fast_pointer_restores_only_last_cell() {
        let grid = Grid::new(8, 1);
        let mut ghost = active_ghost();
        let mut canvas = Recorder::default();

        ghost.update((0, 0), &grid, &PALETTE, &mut canvas);
        canvas.take();
        ghost.update((5, 0), &grid, &PALETTE, &mut canvas);

        let restored: Vec<_> = canvas
            .pixels()
            .into_iter()
            .filter(|&(_, _, color)| color == PALETTE.background)
            .collect();
        assert_eq!(restored, vec![(0, 0, PALETTE.background)]);
    }
}
