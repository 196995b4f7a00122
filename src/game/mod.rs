//! Core game logic module for Snake
//!
//! Nothing in here touches the window, the audio device or the input queue,
//! so every rule of the game can be exercised headless.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod machine;
pub mod state;
pub mod ticker;

pub use action::Direction;
pub use config::Settings;
pub use engine::{AppleSampler, Collision, RandomSampler, StepEngine, StepOutcome};
pub use grid::GridDimensions;
pub use machine::{Game, Update};
pub use state::{Board, Cell, Phase, Snake};
pub use ticker::{Tick, Ticker};
