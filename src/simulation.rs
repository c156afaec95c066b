use crate::canvas::{Canvas, Palette};
use crate::editor::Editor;
use crate::game_state::{RunState, RunStateManager};
use crate::ghost::GhostCursor;
use crate::grid::Grid;
use crate::input::{Command, InputEvent};

/// Everything one running sandbox owns.
///
/// The driver feeds it input events as they arrive and calls
/// [`Simulation::frame`] once per paced frame.
pub struct Simulation {
    grid: Grid,
    editor: Editor,
    ghost: GhostCursor,
    state: RunStateManager,
    palette: Palette,
}

impl Simulation {
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            grid: Grid::new(width, height),
            editor: Editor::new(),
            ghost: GhostCursor::new(),
            state: RunStateManager::new(),
            palette,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[cfg(test)]
    pub fn run_state(&self) -> RunState {
        self.state.state()
    }

    pub fn is_quit(&self) -> bool {
        self.state.is_quit()
    }

    pub fn handle_event(&mut self, event: InputEvent, canvas: &mut dyn Canvas) {
        if self.state.is_quit() {
            return;
        }

        match event {
            InputEvent::Quit => self.state.quit(),
            InputEvent::Key(Command::Pause) => {
                self.state.toggle_pause();
            }
            InputEvent::Key(Command::Clear) => {
                log::debug!("Clearing grid");
                self.grid.clear();
                canvas.redraw(&self.grid, &self.palette);
            }
            InputEvent::Key(Command::Randomize) => {
                log::debug!("Randomizing grid");
                self.grid.randomize();
                canvas.redraw(&self.grid, &self.palette);
            }
            InputEvent::Press { button, x, y } => {
                self.editor.press(button, x, y, &mut self.grid, &self.palette, canvas);
            }
            InputEvent::Release { button } => self.editor.release(button),
            InputEvent::Move { x, y } => {
                self.editor.motion(x, y, &mut self.grid, &self.palette, canvas);
            }
            InputEvent::FocusEnter => {
                log::debug!("Pointer entered window");
                self.ghost.set_active(true);
            }
            InputEvent::FocusLeave => {
                log::debug!("Pointer left window");
                self.ghost.set_active(false);
            }
        }
    }

    /// Per-frame work after the pending events were drained.
    ///
    /// Paused frames only refresh the ghost cursor; running frames advance
    /// one generation and repaint the whole grid.
    pub fn frame(&mut self, pointer: (u32, u32), canvas: &mut dyn Canvas) {
        match self.state.state() {
            RunState::Running => {
                self.grid.step();
                canvas.redraw(&self.grid, &self.palette);
            }
            RunState::Paused => self.ghost.update(pointer, &self.grid, &self.palette, canvas),
            RunState::Quit => {}
        }
    }
}
