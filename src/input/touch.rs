use macroquad::math::{Rect, vec2};

use crate::game::Direction;

/// On-screen arrow buttons for narrow (touch) screens.
///
/// Laid out as a cross: up on top, left and right in the middle row,
/// down at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPad {
    left: Rect,
    up: Rect,
    right: Rect,
    down: Rect,
}

impl TouchPad {
    /// Fit the cross into `area`, centred horizontally.
    pub fn layout(area: Rect) -> Self {
        let size = (area.h / 3.0).min(area.w / 3.0).max(0.0);
        let left_edge = area.x + (area.w - size * 3.0) / 2.0;
        let top_edge = area.y + (area.h - size * 3.0) / 2.0;
        let button = |column: f32, row: f32| {
            Rect::new(left_edge + column * size, top_edge + row * size, size, size)
        };

        Self {
            up: button(1.0, 0.0),
            left: button(0.0, 1.0),
            right: button(2.0, 1.0),
            down: button(1.0, 2.0),
        }
    }

    pub fn button(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Left => self.left,
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
        }
    }

    /// Which button, if any, covers (x, y)
    pub fn hit(&self, x: f32, y: f32) -> Option<Direction> {
        let point = vec2(x, y);
        Direction::ALL
            .into_iter()
            .find(|direction| self.button(*direction).contains(point))
    }
}
