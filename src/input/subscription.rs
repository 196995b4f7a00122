use macroquad::input::{
    MouseButton, get_keys_pressed, is_mouse_button_pressed, mouse_position,
};
use macroquad::logging::debug;

use super::mapper::{InputEvent, InputMapper};
use super::touch::TouchPad;

/// Input source scoped to a mounted game.
///
/// Polls macroquad's keyboard and pointer state once per frame while
/// subscribed. Touches arrive as simulated left mouse presses.
pub struct InputSubscription {
    mapper: InputMapper,
    pad: Option<TouchPad>,
    active: bool,
}

impl InputSubscription {
    pub fn subscribe(pad: Option<TouchPad>) -> Self {
        debug!("Input subscription opened");
        Self {
            mapper: InputMapper::new(),
            pad,
            active: true,
        }
    }

    pub fn pad(&self) -> Option<&TouchPad> {
        self.pad.as_ref()
    }

    pub fn unsubscribe(&mut self) {
        if self.active {
            debug!("Input subscription closed");
        }
        self.active = false;
    }

    /// Events raised since the last frame, keys first.
    pub fn poll(&mut self, running: bool) -> Vec<InputEvent> {
        if !self.active {
            return Vec::new();
        }

        let mut events: Vec<InputEvent> = get_keys_pressed()
            .into_iter()
            .filter_map(|key| self.mapper.map_key(key))
            .collect();

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            events.extend(self.mapper.map_pointer(x, y, running, self.pad.as_ref()));
        }

        events
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
