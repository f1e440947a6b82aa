//! Stage progression: per-stage state, pure transitions, and the controller
//! that sequences stage 1, stage 2, and the end of the game.
//!
//! ## Lifecycle
//!
//! ```text
//! Stage1Active --(all found + grace delay | timer 0)--> Stage2Active
//! Stage2Active --(all found + grace delay | timer 0)--> Finished
//! any active   --(finish_early)-------------------------> Finished
//! ```
//!
//! Score accumulates over both stages. Each stage starts with a fresh grid,
//! a full timer, and no found words.

mod controller;
mod state;
pub mod transitions;

pub use controller::{
    FinishReason, GamePhase, PendingTransition, Phase, StageController, StageEvent,
};
pub use state::{format_time, FoundWord, StageState};
pub use transitions::Advance;
