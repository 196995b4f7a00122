//! Canvas Snake - a grid Snake game drawn with macroquad
//!
//! This library provides:
//! - Core game logic (game module): grid sizing, step engine, state machine
//! - Input mapping and a scoped input subscription (input module)
//! - Canvas rendering behind a `Surface` trait (render module)
//! - Generated audio cues (audio module)
//! - The mounted application that wires everything per frame (app module)

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod render;
