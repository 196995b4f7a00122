use macroquad::input::KeyCode;

use super::touch::TouchPad;
use crate::game::Direction;

/// Input the game state machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    /// Start or restart from the overlay
    Start,
}

/// Translates raw keys and pointer presses into `InputEvent`s
#[derive(Debug, Default, Clone, Copy)]
pub struct InputMapper;

impl InputMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_key(&self, key: KeyCode) -> Option<InputEvent> {
        let event = match key {
            KeyCode::Left | KeyCode::A => InputEvent::Move(Direction::Left),
            KeyCode::Up | KeyCode::W => InputEvent::Move(Direction::Up),
            KeyCode::Right | KeyCode::D => InputEvent::Move(Direction::Right),
            KeyCode::Down | KeyCode::S => InputEvent::Move(Direction::Down),
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => InputEvent::Start,
            _ => return None,
        };
        Some(event)
    }

    /// A press at (x, y). Outside a game the whole screen is the start
    /// overlay; during a game only the arrow pad reacts.
    pub fn map_pointer(
        &self,
        x: f32,
        y: f32,
        running: bool,
        pad: Option<&TouchPad>,
    ) -> Option<InputEvent> {
        if !running {
            return Some(InputEvent::Start);
        }
        pad?.hit(x, y).map(InputEvent::Move)
    }
}
