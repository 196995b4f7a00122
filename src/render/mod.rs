//! Canvas rendering: the drawing surface, the board painter and the HUD

pub mod hud;
pub mod renderer;
pub mod surface;

pub use renderer::Renderer;
pub use surface::{MacroquadSurface, Surface};
