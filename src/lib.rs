//! # rust-wordsearch
//!
//! A two-stage word-search puzzle engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every grid is derived from a seed and a stage, so
//!    games can be replayed, tested and restored from snapshots.
//!
//! 2. **Host-Driven**: No threads, timers or I/O. Hosts feed pointer events
//!    and elapsed time; the engine answers with events.
//!
//! 3. **Never Fatal**: Words that cannot be placed are skipped, bad
//!    selections are ignored, and storage failures are logged. Only loading
//!    configuration and decoding snapshots can fail.
//!
//! ## Architecture
//!
//! - **Grid Generator**: Random-restart placement of words along the eight
//!   straight-line directions, longest first, then filler letters.
//!
//! - **Selection Tracker**: A straight-line path builder shared by the
//!   click-chain and drag input modes.
//!
//! - **Word Validator**: Exact, forward-only matching against the words
//!   still to find.
//!
//! - **Stage Controller**: Two timed stages with a grace delay after
//!   clearing one, cumulative scoring, and session storage.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, grids, words, RNG, configuration
//! - `generator`: Grid generation
//! - `selection`: Selection tracker and input adapters
//! - `validation`: Word validator and scoring
//! - `stage`: Stage state, transitions and controller
//! - `storage`: Session storage collaborator
//! - `snapshot`: Save and resume
//! - `game`: Everything assembled behind one facade

pub mod core;
pub mod error;
pub mod game;
pub mod generator;
pub mod selection;
pub mod snapshot;
pub mod stage;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, GameConfig, GameRng, Grid, Position, StageConfig, StageNumber, Word,
    WordList,
};

pub use crate::error::{ConfigError, SnapshotError};

pub use crate::game::{GameEvent, WordSearchGame};

pub use crate::generator::{
    generate_grid, FillerAlphabet, GeneratedGrid, GeneratorConfig, GridGenerator, Placement,
};

pub use crate::selection::{
    ClickAdapter, DragAdapter, InputAdapter, PointerEvent, SelectionPath, SelectionTracker,
    TrackerState, Transition,
};

pub use crate::validation::{MatchResult, Validation, WordValidator};

pub use crate::stage::{
    FinishReason, GamePhase, Phase, StageController, StageEvent, StageState,
};

pub use crate::storage::{MemoryStore, PlayerId, SessionId, SessionStore, StorageError};

pub use crate::snapshot::GameSnapshot;
