//! Save and resume games.
//!
//! A [`GameSnapshot`] holds the active stage (grid included), the clock and
//! any pending transition. The seed is kept so that stage 2 can still be
//! generated after a restore during stage 1. Snapshots encode to compact
//! bincode bytes.
//!
//! ```
//! use rust_wordsearch::core::GameConfig;
//! use rust_wordsearch::snapshot::GameSnapshot;
//! use rust_wordsearch::stage::StageController;
//! use rust_wordsearch::storage::{MemoryStore, PlayerId};
//!
//! let controller =
//!     StageController::start(GameConfig::default(), &PlayerId::new("p1"), 3, MemoryStore::new());
//! let bytes = controller.snapshot().encode().unwrap();
//!
//! let snapshot = GameSnapshot::decode(&bytes).unwrap();
//! let restored = StageController::restore(GameConfig::default(), MemoryStore::new(), snapshot);
//! assert_eq!(restored.state(), controller.state());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::stage::{GamePhase, PendingTransition};
use crate::storage::SessionId;

/// Resumable state of a [`StageController`](crate::stage::StageController).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub clock_ms: u64,
    pub next_tick_ms: u64,
    pub pending: Option<PendingTransition>,
    pub session: Option<SessionId>,
}

impl GameSnapshot {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
