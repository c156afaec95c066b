use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

/// Pointer buttons the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
}

/// Keyboard commands besides quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Clear,
    Randomize,
}

/// Input already translated into grid terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key(Command),
    Press { button: Button, x: u32, y: u32 },
    Release { button: Button },
    Move { x: u32, y: u32 },
    FocusEnter,
    FocusLeave,
}

/// Translates winit window events into [`InputEvent`]s.
///
/// Device coordinates are divided by the display scale, floored and clamped
/// into the grid, so every coordinate handed on is a valid cell.
pub struct InputHandler {
    scale: f64,
    grid_width: u32,
    grid_height: u32,
    pointer: (u32, u32),
}

impl InputHandler {
    pub fn new(scale: f32, grid_width: u32, grid_height: u32) -> Self {
        Self {
            scale: f64::from(scale),
            grid_width,
            grid_height,
            pointer: (0, 0),
        }
    }

    /// Last known pointer position in grid coordinates.
    pub fn pointer(&self) -> (u32, u32) {
        self.pointer
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput { input, .. } => self.handle_keyboard_input(input),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = self.to_grid(*position);
                let (x, y) = self.pointer;
                Some(InputEvent::Move { x, y })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(*button)?;
                match state {
                    ElementState::Pressed => {
                        let (x, y) = self.pointer;
                        Some(InputEvent::Press { button, x, y })
                    }
                    ElementState::Released => Some(InputEvent::Release { button }),
                }
            }
            WindowEvent::CursorEntered { .. } => Some(InputEvent::FocusEnter),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::FocusLeave),
            _ => None,
        }
    }

    fn handle_keyboard_input(&self, input: &KeyboardInput) -> Option<InputEvent> {
        if input.state != ElementState::Pressed {
            return None;
        }
        map_key(input.virtual_keycode?)
    }

    fn to_grid(&self, position: PhysicalPosition<f64>) -> (u32, u32) {
        (
            scale_down(position.x, self.scale, self.grid_width),
            scale_down(position.y, self.scale, self.grid_height),
        )
    }
}

fn scale_down(device: f64, scale: f64, cells: u32) -> u32 {
    let cell = (device / scale).floor();
    if cell <= 0.0 {
        0
    } else {
        (cell as u32).min(cells - 1)
    }
}

fn map_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::Primary),
        MouseButton::Right => Some(Button::Secondary),
        _ => None,
    }
}

fn map_key(key_code: VirtualKeyCode) -> Option<InputEvent> {
    match key_code {
        VirtualKeyCode::Escape => Some(InputEvent::Quit),
        VirtualKeyCode::Space => Some(InputEvent::Key(Command::Pause)),
        VirtualKeyCode::C => Some(InputEvent::Key(Command::Clear)),
        VirtualKeyCode::R => Some(InputEvent::Key(Command::Randomize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_to_grid_divides_and_floors() {
        let handler = InputHandler::new(3.0, 500, 300);
        assert_eq!(handler.to_grid(PhysicalPosition::new(0.0, 0.0)), (0, 0));
        assert_eq!(handler.to_grid(PhysicalPosition::new(2.9, 3.0)), (0, 1));
        assert_eq!(handler.to_grid(PhysicalPosition::new(1499.0, 899.5)), (499, 299));
    }

    #[test]
    fn fractional_scale() {
        let handler = InputHandler::new(2.5, 10, 10);
        assert_eq!(handler.to_grid(PhysicalPosition::new(4.9, 5.0)), (1, 2));
    }

    #[test]
    fn positions_outside_window_are_clamped() {
        let handler = InputHandler::new(2.0, 4, 3);
        assert_eq!(handler.to_grid(PhysicalPosition::new(-7.0, -0.5)), (0, 0));
        assert_eq!(handler.to_grid(PhysicalPosition::new(100.0, 6.0)), (3, 2));
    }

    #[test]
    fn key_bindings() {
        assert_eq!(map_key(VirtualKeyCode::Escape), Some(InputEvent::Quit));
        assert_eq!(map_key(VirtualKeyCode::Space), Some(InputEvent::Key(Command::Pause)));
        assert_eq!(map_key(VirtualKeyCode::C), Some(InputEvent::Key(Command::Clear)));
        assert_eq!(map_key(VirtualKeyCode::R), Some(InputEvent::Key(Command::Randomize)));
        assert_eq!(map_key(VirtualKeyCode::Q), None);
    }

    #[test]
    fn button_bindings() {
        assert_eq!(map_button(MouseButton::Left), Some(Button::Primary));
        assert_eq!(map_button(MouseButton::Right), Some(Button::Secondary));
        assert_eq!(map_button(MouseButton::Middle), None);
    }

    #[test]
    fn close_and_focus_events() {
        let mut handler = InputHandler::new(1.0, 4, 4);
        assert_eq!(
            handler.handle_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(handler.handle_window_event(&WindowEvent::Focused(true)), None);
    }
}
