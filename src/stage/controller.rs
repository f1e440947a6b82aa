//! Stage controller: owns the game's progress and drives stage changes.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{GameConfig, GameRng, StageNumber};
use crate::snapshot::GameSnapshot;
use crate::storage::{FinalReport, PlayerId, SessionId, SessionPatch, SessionStore};
use crate::validation::MatchResult;

use super::state::StageState;
use super::transitions::{self, Advance};

const TICK_MS: u64 = 1000;

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Stage1Active,
    Stage2Active,
    Finished,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Every word of the last stage was found.
    Completed,
    /// The last stage's timer ran out.
    TimeExpired,
    /// The player ended the game.
    EndedEarly,
}

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageEvent {
    WordFound(MatchResult),
    /// Every word is found; the stage changes after the grace delay.
    StageCleared(StageNumber),
    TimerTick { stage: StageNumber, remaining: u32 },
    TimeExpired(StageNumber),
    StageStarted(StageNumber),
    Finished { score: u32, reason: FinishReason },
}

/// A deferred stage change, scheduled on the controller's clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    /// Stage that scheduled it. Any other end of that stage cancels it.
    pub stage: StageNumber,
    pub fires_at_ms: u64,
}

/// Active stage or final result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Active(StageState),
    Finished { score: u32, reason: FinishReason },
}

/// Owns the current [`StageState`] and moves it through
/// `Stage1Active -> Stage2Active -> Finished`.
///
/// Time is host-driven: call [`elapse`](Self::elapse) with wall-clock
/// deltas (or [`tick`](Self::tick) once a second). The one-second stage
/// timer and the grace delay after clearing a stage both run on that clock.
///
/// During the grace delay the cleared stage is still active: its grid
/// stays in place and new input is still accepted against it.
pub struct StageController<S: SessionStore> {
    config: GameConfig,
    rng: GameRng,
    store: S,
    session: Option<SessionId>,
    phase: GamePhase,
    clock_ms: u64,
    next_tick_ms: u64,
    pending: Option<PendingTransition>,
}

impl<S: SessionStore> StageController<S> {
    /// Start a game: generate stage 1 and open a session.
    ///
    /// A failed session open is logged; the game runs without persistence.
    #[instrument(skip(config, player, store), fields(player = %player))]
    pub fn start(config: GameConfig, player: &PlayerId, seed: u64, mut store: S) -> Self {
        let rng = GameRng::new(seed);
        let session = match store.create_session(player, StageNumber::One) {
            Ok(id) => {
                info!(session_id = %id, "Game session opened");
                Some(id)
            }
            Err(err) => {
                warn!(error = %err, "Could not open game session, continuing without one");
                None
            }
        };
        let state = transitions::begin_stage(StageNumber::One, &config, &rng, 0);

        Self {
            config,
            rng,
            store,
            session,
            phase: GamePhase::Active(state),
            clock_ms: 0,
            next_tick_ms: TICK_MS,
            pending: None,
        }
    }

    /// Capture everything needed to resume this game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.rng.seed(),
            phase: self.phase.clone(),
            clock_ms: self.clock_ms,
            next_tick_ms: self.next_tick_ms,
            pending: self.pending,
            session: self.session.clone(),
        }
    }

    /// Resume a game from a snapshot.
    ///
    /// `config` must be the configuration the game was started with; a
    /// later stage is generated from it and the snapshot's seed.
    #[instrument(skip_all, fields(seed = snapshot.seed))]
    pub fn restore(config: GameConfig, store: S, snapshot: GameSnapshot) -> Self {
        info!(clock_ms = snapshot.clock_ms, "Game restored from snapshot");
        Self {
            config,
            rng: GameRng::new(snapshot.seed),
            store,
            session: snapshot.session,
            phase: snapshot.phase,
            clock_ms: snapshot.clock_ms,
            next_tick_ms: snapshot.next_tick_ms,
            pending: snapshot.pending,
        }
    }

    /// Coarse phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.phase {
            GamePhase::Active(state) => match state.stage() {
                StageNumber::One => Phase::Stage1Active,
                StageNumber::Two => Phase::Stage2Active,
            },
            GamePhase::Finished { .. } => Phase::Finished,
        }
    }

    /// Full phase, including the active stage state.
    #[must_use]
    pub fn game_phase(&self) -> &GamePhase {
        &self.phase
    }

    /// The active stage, unless the game is over.
    #[must_use]
    pub fn state(&self) -> Option<&StageState> {
        match &self.phase {
            GamePhase::Active(state) => Some(state),
            GamePhase::Finished { .. } => None,
        }
    }

    /// Score so far, or the final score.
    #[must_use]
    pub fn score(&self) -> u32 {
        match &self.phase {
            GamePhase::Active(state) => state.score(),
            GamePhase::Finished { score, .. } => *score,
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the game was started with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Session id, if one was opened.
    #[must_use]
    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// The storage collaborator.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Milliseconds of game time elapsed.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Clock time of the next timer tick.
    #[must_use]
    pub fn next_tick_ms(&self) -> u64 {
        self.next_tick_ms
    }

    /// Stage change waiting out the grace delay.
    #[must_use]
    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Apply a match from the validator.
    ///
    /// Matches for words that are no longer remaining are ignored.
    #[instrument(skip(self, found), fields(word = %found.word))]
    pub fn on_match(&mut self, found: MatchResult) -> Vec<StageEvent> {
        let mut events = Vec::new();
        let Some(state) = self.take_active() else {
            return events;
        };
        if !state.remaining().contains(&found.word) {
            debug!("Match for a word already found, ignoring");
            self.phase = GamePhase::Active(state);
            return events;
        }

        let state = transitions::record_match(state, found.clone());
        let stage = state.stage();
        let complete = state.is_complete();
        let patch = SessionPatch {
            words_found: Some(state.found().iter().map(|f| f.word.clone()).collect()),
            score: Some(state.score()),
            ..SessionPatch::default()
        };
        info!(%stage, points = found.points, score = state.score(), "Word found");
        self.phase = GamePhase::Active(state);
        events.push(StageEvent::WordFound(found));
        self.notify(patch);

        if complete && self.pending.is_none() {
            events.push(StageEvent::StageCleared(stage));
            if self.config.transition_delay_ms == 0 {
                events.extend(self.advance(FinishReason::Completed));
            } else {
                let fires_at_ms = self.clock_ms.saturating_add(self.config.transition_delay_ms);
                debug!(%stage, fires_at_ms, "Stage cleared, transition scheduled");
                self.pending = Some(PendingTransition { stage, fires_at_ms });
            }
        }
        events
    }

    /// Advance the clock, firing due timer ticks and deferred transitions
    /// in chronological order.
    pub fn elapse(&mut self, delta: Duration) -> Vec<StageEvent> {
        let delta_ms = u64::try_from(delta.as_millis()).unwrap_or(u64::MAX);
        let target = self.clock_ms.saturating_add(delta_ms);
        let mut events = Vec::new();

        while !self.is_finished() {
            let pending_due = self.pending.map(|p| p.fires_at_ms);
            let next_due = pending_due.map_or(self.next_tick_ms, |p| p.min(self.next_tick_ms));
            if next_due > target {
                break;
            }
            self.clock_ms = next_due;

            if pending_due.is_some_and(|p| p <= next_due) {
                self.pending = None;
                events.extend(self.advance(FinishReason::Completed));
            } else {
                self.next_tick_ms = self.next_tick_ms.saturating_add(TICK_MS);
                events.extend(self.on_tick());
            }
        }

        self.clock_ms = target;
        events
    }

    /// One second of game time.
    pub fn tick(&mut self) -> Vec<StageEvent> {
        self.elapse(Duration::from_millis(TICK_MS))
    }

    /// End the game now with the score so far, skipping any remaining
    /// stage and cancelling a pending transition.
    #[instrument(skip(self))]
    pub fn finish_early(&mut self) -> Vec<StageEvent> {
        let Some(state) = self.take_active() else {
            return Vec::new();
        };
        info!(stage = %state.stage(), score = state.score(), "Game ended early");
        self.finish(state.score(), FinishReason::EndedEarly)
    }

    fn on_tick(&mut self) -> Vec<StageEvent> {
        let Some(state) = self.take_active() else {
            return Vec::new();
        };
        let state = transitions::tick(state);
        let stage = state.stage();
        let remaining = state.time_remaining();
        self.phase = GamePhase::Active(state);

        let mut events = vec![StageEvent::TimerTick { stage, remaining }];
        if remaining == 0 {
            info!(%stage, "Stage time expired");
            events.push(StageEvent::TimeExpired(stage));
            events.extend(self.advance(FinishReason::TimeExpired));
        }
        events
    }

    /// End the active stage. `reason` is used only if this ends the game.
    fn advance(&mut self, reason: FinishReason) -> Vec<StageEvent> {
        if let Some(pending) = self.pending.take() {
            debug!(stage = %pending.stage, "Cancelling pending transition");
        }
        let Some(state) = self.take_active() else {
            return Vec::new();
        };

        match transitions::advance(state, &self.config, &self.rng) {
            Advance::Next(next) => {
                let stage = next.stage();
                let patch = SessionPatch {
                    stage: Some(stage),
                    score: Some(next.score()),
                    ..SessionPatch::default()
                };
                self.phase = GamePhase::Active(next);
                self.next_tick_ms = self.clock_ms.saturating_add(TICK_MS);
                self.notify(patch);
                vec![StageEvent::StageStarted(stage)]
            }
            Advance::Finished { score } => self.finish(score, reason),
        }
    }

    fn finish(&mut self, score: u32, reason: FinishReason) -> Vec<StageEvent> {
        self.pending = None;
        self.phase = GamePhase::Finished { score, reason };
        info!(score, ?reason, "Game finished");

        match &self.session {
            Some(id) => {
                let report = FinalReport {
                    score,
                    completed_at: Utc::now(),
                };
                if let Err(err) = self.store.finalize_session(id, report) {
                    warn!(session_id = %id, error = %err, "Could not finalize session");
                }
            }
            None => debug!("No session to finalize"),
        }
        vec![StageEvent::Finished { score, reason }]
    }

    fn notify(&mut self, patch: SessionPatch) {
        match &self.session {
            Some(id) => {
                if let Err(err) = self.store.update_session(id, patch) {
                    warn!(session_id = %id, error = %err, "Session update failed");
                }
            }
            None => debug!("No session, skipping update"),
        }
    }

    /// Take the active state out, leaving a placeholder the caller must
    /// overwrite. Returns `None` (and changes nothing) once finished.
    fn take_active(&mut self) -> Option<StageState> {
        if self.is_finished() {
            return None;
        }
        let placeholder = GamePhase::Finished {
            score: self.score(),
            reason: FinishReason::EndedEarly,
        };
        match std::mem::replace(&mut self.phase, placeholder) {
            GamePhase::Active(state) => Some(state),
            finished @ GamePhase::Finished { .. } => {
                self.phase = finished;
                None
            }
        }
    }
}

impl<S: SessionStore> std::fmt::Debug for StageController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageController")
            .field("phase", &self.phase())
            .field("score", &self.score())
            .field("session", &self.session)
            .field("clock_ms", &self.clock_ms)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
