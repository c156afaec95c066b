use rand::Rng;

/// Double-buffered boolean cell storage for the life simulation.
///
/// Cells are stored row-major in `cells`; `scratch` receives the next
/// generation during [`Grid::step`] and is swapped in afterwards.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;

        Self {
            width,
            height,
            cells: vec![false; len],
            scratch: vec![false; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills the grid from the thread-local random source.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Sets every cell alive with probability one half.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }

    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Counts live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// Neighbours past the edge of the grid do not exist; there is no wrap.
    pub fn live_neighbors(&self, x: u32, y: u32) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        let mut count = 0;
        for ny in y_range {
            for nx in x_range.clone() {
                if (nx, ny) != (x, y) && self.get(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation.
    ///
    /// Every next state is computed from the unmodified current buffer into
    /// `scratch`, then the two buffers trade places.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let next = next_state(self.get(x, y), self.live_neighbors(x, y));
                let index = self.index(x, y);
                self.scratch[index] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}
