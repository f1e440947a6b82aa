//! Core engine types: geometry, grid, words, RNG, configuration.
//!
//! These are the building blocks every other module works with. None of
//! them hold game progress; that lives in [`crate::stage`].

pub mod config;
pub mod geometry;
pub mod grid;
pub mod rng;
pub mod words;

pub use config::{GameConfig, StageConfig, StageNumber};
pub use geometry::{Direction, Position};
pub use grid::{Cell, Grid};
pub use rng::GameRng;
pub use words::{Word, WordList};
