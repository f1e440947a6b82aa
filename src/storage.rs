//! Session storage collaborator.
//!
//! The engine reports progress to a [`SessionStore`] but never depends on
//! it: every call is fire-and-forget from gameplay's point of view. The
//! caller logs failures and carries on; nothing is retried.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{StageNumber, Word};

/// Identifies the player a session belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a stored game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Partial update of a session. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPatch {
    pub stage: Option<StageNumber>,
    pub words_found: Option<Vec<Word>>,
    pub score: Option<u32>,
}

/// Final result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    pub score: u32,
    pub completed_at: DateTime<Utc>,
}

/// Storage failures. Always logged, never fatal.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage rejected the request: {0}")]
    Rejected(String),

    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    #[error("session {0} is already finalized")]
    AlreadyFinalized(SessionId),
}

/// Persistence collaborator for game sessions.
pub trait SessionStore {
    /// Open a session when stage 1 begins.
    fn create_session(
        &mut self,
        player: &PlayerId,
        stage: StageNumber,
    ) -> Result<SessionId, StorageError>;

    /// Record progress: a found word, a new stage.
    fn update_session(&mut self, id: &SessionId, patch: SessionPatch) -> Result<(), StorageError>;

    /// Record the final score. Called once per game.
    fn finalize_session(&mut self, id: &SessionId, report: FinalReport)
        -> Result<(), StorageError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn create_session(
        &mut self,
        player: &PlayerId,
        stage: StageNumber,
    ) -> Result<SessionId, StorageError> {
        (**self).create_session(player, stage)
    }

    fn update_session(&mut self, id: &SessionId, patch: SessionPatch) -> Result<(), StorageError> {
        (**self).update_session(id, patch)
    }

    fn finalize_session(
        &mut self,
        id: &SessionId,
        report: FinalReport,
    ) -> Result<(), StorageError> {
        (**self).finalize_session(id, report)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn create_session(
        &mut self,
        player: &PlayerId,
        stage: StageNumber,
    ) -> Result<SessionId, StorageError> {
        (**self).create_session(player, stage)
    }

    fn update_session(&mut self, id: &SessionId, patch: SessionPatch) -> Result<(), StorageError> {
        (**self).update_session(id, patch)
    }

    fn finalize_session(
        &mut self,
        id: &SessionId,
        report: FinalReport,
    ) -> Result<(), StorageError> {
        (**self).finalize_session(id, report)
    }
}

/// Everything recorded about one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub player: PlayerId,
    pub stage: StageNumber,
    pub words_found: Vec<Word>,
    pub score: u32,
    pub completed_at: Option<DateTime<Utc>>,
    /// Number of accepted `update_session` calls.
    pub updates: u32,
}

/// In-process session store.
///
/// Suitable for hosts without a backend and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    sessions: FxHashMap<SessionId, SessionRecord>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a session.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&SessionRecord> {
        self.sessions.get(id)
    }

    /// Number of sessions created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn open_record(&mut self, id: &SessionId) -> Result<&mut SessionRecord, StorageError> {
        let record = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| StorageError::UnknownSession(id.clone()))?;
        if record.completed_at.is_some() {
            return Err(StorageError::AlreadyFinalized(id.clone()));
        }
        Ok(record)
    }
}

impl SessionStore for MemoryStore {
    fn create_session(
        &mut self,
        player: &PlayerId,
        stage: StageNumber,
    ) -> Result<SessionId, StorageError> {
        self.next_id += 1;
        let id = SessionId(format!("session-{}", self.next_id));
        info!(session_id = %id, player = %player, "Session created");
        self.sessions.insert(
            id.clone(),
            SessionRecord {
                player: player.clone(),
                stage,
                words_found: Vec::new(),
                score: 0,
                completed_at: None,
                updates: 0,
            },
        );
        Ok(id)
    }

    fn update_session(&mut self, id: &SessionId, patch: SessionPatch) -> Result<(), StorageError> {
        let record = self.open_record(id)?;
        if let Some(stage) = patch.stage {
            record.stage = stage;
        }
        if let Some(words) = patch.words_found {
            record.words_found = words;
        }
        if let Some(score) = patch.score {
            record.score = score;
        }
        record.updates += 1;
        debug!(session_id = %id, score = record.score, "Session updated");
        Ok(())
    }

    fn finalize_session(
        &mut self,
        id: &SessionId,
        report: FinalReport,
    ) -> Result<(), StorageError> {
        let record = self.open_record(id)?;
        record.score = report.score;
        record.completed_at = Some(report.completed_at);
        info!(session_id = %id, score = report.score, "Session finalized");
        Ok(())
    }
}
