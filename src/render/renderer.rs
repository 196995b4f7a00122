use macroquad::color::Color;

use super::surface::Surface;
use crate::game::{Board, Cell, GridDimensions};

pub const SNAKE_COLOR: Color = Color::new(0.0, 0.584, 0.0, 1.0); // #009500
pub const APPLE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0); // #f00

/// Paints the board onto a surface. Output depends only on the board.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    cell_size: f32,
}

impl Renderer {
    pub fn new(grid: GridDimensions) -> Self {
        Self {
            cell_size: grid.cell_size,
        }
    }

    pub fn paint(&self, board: Option<&Board>, surface: &mut dyn Surface) {
        let (width, height) = surface.size();
        surface.clear_rect(0.0, 0.0, width, height);

        let Some(board) = board else {
            return;
        };

        surface.set_fill_color(SNAKE_COLOR);
        for cell in board.snake.segments() {
            let (x, y) = self.corner(*cell);
            surface.fill_rect(x, y, self.cell_size, self.cell_size);
        }

        if let Some(apple) = board.apple {
            let (x, y) = self.corner(apple);
            let radius = self.cell_size / 2.0;
            surface.set_fill_color(APPLE_COLOR);
            surface.fill_circle(x + radius, y + radius, radius);
        }
    }

    fn corner(&self, cell: Cell) -> (f32, f32) {
        (
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
        )
    }
}
