use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_rectangle};

/// A 2D drawing surface with its own origin at the top-left corner
pub trait Surface {
    /// Pixel size (width, height)
    fn size(&self) -> (f32, f32);
    fn set_fill_color(&mut self, color: Color);
    /// Reset a rectangle to the background
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);
}

/// The canvas: a rectangle of the macroquad window
#[derive(Debug, Clone, Copy)]
pub struct MacroquadSurface {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    fill: Color,
    background: Color,
}

impl MacroquadSurface {
    pub fn new(background: Color) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fill: background,
            background,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Move the surface's top-left corner to window position (x, y)
    pub fn place(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(self.x + x, self.y + y, w, h, self.background);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(self.x + x, self.y + y, w, h, self.fill);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        draw_circle(self.x + cx, self.y + cy, radius, self.fill);
    }
}
