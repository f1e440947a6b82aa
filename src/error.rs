//! Error types for configuration and snapshots.
//!
//! Gameplay itself never fails: unplaceable words, invalid selections and
//! missed commits are ordinary outcomes. Only loading configuration and
//! decoding snapshots return errors. Storage errors live in
//! [`crate::storage::StorageError`].

use thiserror::Error;

/// Invalid game or generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stage {stage} grid size must be at least 1")]
    ZeroGridSize { stage: u8 },

    #[error("round duration must be at least one second")]
    ZeroRoundDuration,

    #[error("placement attempt budget must be at least 1")]
    ZeroAttempts,

    #[error("filler alphabet must contain at least one letter")]
    EmptyFiller,

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to encode or decode a game snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
