/// Run mode of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running, // Generations advance every frame
    Paused,  // Grid frozen, ghost cursor shown
    Quit,    // Terminal, nothing else happens
}

/// Owns the run mode and enforces its transitions
#[derive(Debug)]
pub struct RunStateManager {
    state: RunState,
}

impl RunStateManager {
    /// Creates a new manager in running state
    pub fn new() -> Self {
        Self {
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Flips between running and paused. Ignored once quit.
    pub fn toggle_pause(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Quit => RunState::Quit,
        };
        log::debug!("Run state is now {:?}", self.state);
        self.state
    }

    /// Enters the terminal quit state
    pub fn quit(&mut self) {
        if self.state != RunState::Quit {
            log::debug!("Quit requested while {:?}", self.state);
        }
        self.state = RunState::Quit;
    }

    /// Returns whether generations should advance
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Returns whether the simulation is paused
    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Returns whether the simulation has ended
    pub fn is_quit(&self) -> bool {
        self.state == RunState::Quit
    }
}

impl Default for RunStateManager {
    fn default() -> Self {
        Self::new()
    }
}
