use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Body, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Loop flags the input handler is allowed to flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub running: bool,
    pub paused: bool,
    pub restart: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            running: true,
            paused: false,
            restart: false,
        }
    }

    /// Apply a decoded key to the flags, steering `body` if it is a move
    pub fn apply<B: Body>(&mut self, action: KeyAction, body: &mut B) {
        match action {
            KeyAction::Steer(direction) => body.steer(direction),
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::Restart => self.restart = true,
            KeyAction::Quit => self.running = false,
            KeyAction::None => {}
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::TogglePause
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snake};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Steer(Direction::Left)
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char(' '))), KeyAction::TogglePause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('p'))), KeyAction::TogglePause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('r'))), KeyAction::Restart);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_controls_toggle_flags() {
        let mut controls = Controls::new();
        let mut snake = Snake::new(10, 10);

        controls.apply(KeyAction::TogglePause, &mut snake);
        assert!(controls.paused);
        controls.apply(KeyAction::TogglePause, &mut snake);
        assert!(!controls.paused);

        controls.apply(KeyAction::Restart, &mut snake);
        assert!(controls.restart);

        controls.apply(KeyAction::Quit, &mut snake);
        assert!(!controls.running);
    }

    #[test]
    fn test_controls_steer_body() {
        let mut controls = Controls::new();
        let mut snake = Snake::at(Position::new(5, 5), Direction::Up, 1.0, 10, 10);

        controls.apply(KeyAction::Steer(Direction::Left), &mut snake);

        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(controls, Controls::new());
    }
}
