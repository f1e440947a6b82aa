//! Stage controller integration tests.
//!
//! These tests drive the controller with real selections built along the
//! generated placements, and check stage changes, the grace delay, early
//! finish and resilience to storage failures.

use std::time::Duration;

use rust_wordsearch::core::{GameConfig, StageConfig, StageNumber, Word};
use rust_wordsearch::generator::{FillerAlphabet, GeneratorConfig, Placement};
use rust_wordsearch::selection::{SelectionTracker, Transition};
use rust_wordsearch::stage::{FinishReason, Phase, StageController, StageEvent, StageState};
use rust_wordsearch::storage::{
    FinalReport, MemoryStore, PlayerId, SessionId, SessionPatch, SessionStore, StorageError,
};
use rust_wordsearch::validation::{MatchResult, Validation, WordValidator};

// =============================================================================
// Helpers
// =============================================================================

fn config() -> GameConfig {
    GameConfig::new(
        StageConfig::new(["CAT", "DOG", "SUN", "MOON", "STAR"], 10),
        StageConfig::new(["RED", "BLUE", "GREEN"], 8),
    )
    .with_round_duration(60)
    .with_generator(GeneratorConfig::default().with_filler(FillerAlphabet::latin()))
}

fn start(config: GameConfig) -> StageController<MemoryStore> {
    StageController::start(config, &PlayerId::new("player-1"), 2024, MemoryStore::new())
}

/// Select a placement cell by cell and validate it like a player would.
fn select(state: &StageState, placement: &Placement) -> MatchResult {
    let mut tracker = SelectionTracker::new();
    for (i, pos) in placement.positions().into_iter().enumerate() {
        let cell = state.grid().cell(pos).unwrap();
        if i == 0 {
            tracker.start(cell);
        } else {
            assert_eq!(tracker.extend(cell), Transition::Extended);
        }
    }
    let Transition::Committed(path) = tracker.commit() else {
        panic!("placement shorter than two letters");
    };
    match WordValidator.validate(&path, state.remaining()) {
        Validation::Match(found) => found,
        Validation::NoMatch => panic!("{} did not match", placement.word),
    }
}

fn find(controller: &mut StageController<MemoryStore>, word: &str) -> Vec<StageEvent> {
    let state = controller.state().unwrap();
    let placement = state
        .placements()
        .iter()
        .find(|p| p.word.as_str() == word)
        .unwrap()
        .clone();
    let found = select(state, &placement);
    controller.on_match(found)
}

fn find_all(controller: &mut StageController<MemoryStore>) -> Vec<StageEvent> {
    let words: Vec<String> = controller
        .state()
        .unwrap()
        .words()
        .iter()
        .map(|w| w.as_str().to_string())
        .collect();
    words.iter().flat_map(|w| find(controller, w)).collect()
}

// =============================================================================
// Stage transitions
// =============================================================================

/// Finding every stage-1 word moves to stage 2 after the grace delay.
#[test]
fn test_all_words_found_advances_to_stage_two() {
    let mut controller = start(config());
    let stage1_grid = controller.state().unwrap().grid().clone();
    controller.elapse(Duration::from_secs(10));

    let events = find_all(&mut controller);
    assert!(events.contains(&StageEvent::StageCleared(StageNumber::One)));
    assert_eq!(controller.phase(), Phase::Stage1Active);
    assert_eq!(controller.score(), 170);

    let events = controller.elapse(Duration::from_millis(600));
    assert_eq!(events, vec![StageEvent::StageStarted(StageNumber::Two)]);

    let state = controller.state().unwrap();
    assert_eq!(controller.phase(), Phase::Stage2Active);
    assert_eq!(state.grid().size(), 8);
    assert_ne!(state.grid(), &stage1_grid);
    assert_eq!(state.time_remaining(), 60);
    assert!(state.found().is_empty());
    assert_eq!(state.score(), 170);
}

/// Timer expiry with words unfound triggers the same transition.
#[test]
fn test_timer_expiry_advances_to_stage_two() {
    let mut controller = start(config());
    find(&mut controller, "CAT");
    find(&mut controller, "MOON");
    assert_eq!(controller.state().unwrap().progress(), (2, 5));

    let events = controller.elapse(Duration::from_secs(60));
    assert!(events.contains(&StageEvent::TimeExpired(StageNumber::One)));
    assert_eq!(events.last(), Some(&StageEvent::StageStarted(StageNumber::Two)));

    let state = controller.state().unwrap();
    assert_eq!(state.stage(), StageNumber::Two);
    assert_eq!(state.time_remaining(), 60);
    assert_eq!(state.score(), 70);
}

/// One tick per second, counting down.
#[test]
fn test_timer_ticks_every_second() {
    let mut controller = start(config());
    let events = controller.elapse(Duration::from_millis(3500));

    let remaining: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            StageEvent::TimerTick { remaining, .. } => Some(*remaining),
            _ => None,
        })
        .collect();
    assert_eq!(remaining, vec![59, 58, 57]);
    assert_eq!(controller.state().unwrap().time_label(), "0:57");
}

/// A per-stage duration overrides the game-wide one.
#[test]
fn test_stage_duration_override() {
    let config = GameConfig::new(
        StageConfig::new(["CAT"], 6).with_round_duration(5),
        StageConfig::new(["DOG"], 6),
    )
    .with_round_duration(90);
    let mut controller = start(config);

    assert_eq!(controller.state().unwrap().time_remaining(), 5);
    controller.elapse(Duration::from_secs(5));
    assert_eq!(controller.state().unwrap().time_remaining(), 90);
}

/// Finishing stage 2 ends the game with the cumulative score.
#[test]
fn test_game_completes_after_stage_two() {
    let mut controller = start(config());
    find_all(&mut controller);
    controller.elapse(Duration::from_millis(600));
    find_all(&mut controller);

    let events = controller.elapse(Duration::from_millis(600));
    assert_eq!(
        events,
        vec![StageEvent::Finished { score: 290, reason: FinishReason::Completed }]
    );
    assert_eq!(controller.phase(), Phase::Finished);
    assert!(controller.state().is_none());
}

// =============================================================================
// Grace window
// =============================================================================

/// The cleared stage stays in place during the grace delay.
#[test]
fn test_grace_window_keeps_cleared_stage() {
    let mut controller = start(config());
    find_all(&mut controller);

    controller.elapse(Duration::from_millis(300));
    let state = controller.state().unwrap();
    assert_eq!(state.stage(), StageNumber::One);
    assert!(state.is_complete());
    assert!(state.remaining().is_empty());
}

/// Timer expiry inside the grace window replaces the deferred transition.
#[test]
fn test_expiry_during_grace_window_transitions_once() {
    let config = GameConfig::new(
        StageConfig::new(["CAT", "DOG"], 8).with_round_duration(1),
        StageConfig::new(["SUN"], 8),
    )
    .with_round_duration(60)
    .with_generator(GeneratorConfig::default().with_filler(FillerAlphabet::latin()));
    let mut controller = start(config);

    controller.elapse(Duration::from_millis(900));
    find_all(&mut controller);
    assert!(controller.pending().is_some());

    let events = controller.elapse(Duration::from_millis(700));
    let started = events
        .iter()
        .filter(|e| matches!(e, StageEvent::StageStarted(_)))
        .count();
    assert_eq!(started, 1);
    assert!(events.contains(&StageEvent::TimeExpired(StageNumber::One)));
    assert!(controller.pending().is_none());

    let state = controller.state().unwrap();
    assert_eq!(state.stage(), StageNumber::Two);
    assert_eq!(state.time_remaining(), 60);
}

// =============================================================================
// Early finish
// =============================================================================

/// Ending early keeps the score and skips stage 2.
#[test]
fn test_finish_early_from_stage_one() {
    let mut controller = start(config());
    find(&mut controller, "STAR");

    let events = controller.finish_early();
    assert_eq!(
        events,
        vec![StageEvent::Finished { score: 40, reason: FinishReason::EndedEarly }]
    );

    let record = controller.store().get(controller.session().unwrap()).unwrap();
    assert_eq!(record.score, 40);
    assert!(record.completed_at.is_some());
}

/// Matches after the game ends are ignored.
#[test]
fn test_match_after_finish_ignored() {
    let mut controller = start(config());
    let state = controller.state().unwrap().clone();
    let placement = state.placements()[0].clone();
    controller.finish_early();

    assert!(controller.on_match(select(&state, &placement)).is_empty());
    assert_eq!(controller.score(), 0);
}

// =============================================================================
// Storage
// =============================================================================

/// Store that can refuse calls and counts what it was asked.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_create: bool,
    fail_update: bool,
    updates: u32,
    finalizations: u32,
}

impl SessionStore for FlakyStore {
    fn create_session(
        &mut self,
        player: &PlayerId,
        stage: StageNumber,
    ) -> Result<SessionId, StorageError> {
        if self.fail_create {
            return Err(StorageError::Rejected("offline".to_string()));
        }
        self.inner.create_session(player, stage)
    }

    fn update_session(&mut self, id: &SessionId, patch: SessionPatch) -> Result<(), StorageError> {
        self.updates += 1;
        if self.fail_update {
            return Err(StorageError::Rejected("offline".to_string()));
        }
        self.inner.update_session(id, patch)
    }

    fn finalize_session(
        &mut self,
        id: &SessionId,
        report: FinalReport,
    ) -> Result<(), StorageError> {
        self.finalizations += 1;
        self.inner.finalize_session(id, report)
    }
}

/// Without a session the game plays normally and storage is never called.
#[test]
fn test_failed_session_open_does_not_block_play() {
    let store = FlakyStore {
        fail_create: true,
        ..FlakyStore::default()
    };
    let mut controller = StageController::start(config(), &PlayerId::new("p"), 5, store);
    assert!(controller.session().is_none());

    controller.elapse(Duration::from_secs(60));
    assert_eq!(controller.phase(), Phase::Stage2Active);
    controller.finish_early();

    assert_eq!(controller.store().updates, 0);
    assert_eq!(controller.store().finalizations, 0);
}

/// Rejected updates are logged and play continues.
#[test]
fn test_failed_updates_do_not_block_play() {
    let store = FlakyStore {
        fail_update: true,
        ..FlakyStore::default()
    };
    let mut controller = StageController::start(config(), &PlayerId::new("p"), 5, store);

    let placement = controller.state().unwrap().placements()[0].clone();
    let found = select(controller.state().unwrap(), &placement);
    let points = found.points;
    let events = controller.on_match(found);

    assert!(matches!(events.first(), Some(StageEvent::WordFound(_))));
    assert_eq!(controller.score(), points);
    assert_eq!(controller.store().updates, 1);
}

/// The session is finalized exactly once however the game ends.
#[test]
fn test_finalize_called_once() {
    let mut controller =
        StageController::start(config(), &PlayerId::new("p"), 5, FlakyStore::default());

    controller.elapse(Duration::from_secs(120));
    assert_eq!(controller.phase(), Phase::Finished);
    controller.finish_early();
    controller.elapse(Duration::from_secs(120));

    assert_eq!(controller.store().finalizations, 1);
    let record = controller
        .store()
        .inner
        .get(controller.session().unwrap())
        .unwrap();
    assert!(record.completed_at.is_some());
}

/// Progress reaches the store: found words, then the new stage.
#[test]
fn test_progress_reported_to_store() {
    let mut controller = start(config());
    find(&mut controller, "SUN");
    find(&mut controller, "DOG");

    let id = controller.session().unwrap().clone();
    let record = controller.store().get(&id).unwrap();
    assert_eq!(record.words_found, vec![Word::new("SUN"), Word::new("DOG")]);
    assert_eq!(record.score, 60);

    controller.elapse(Duration::from_secs(60));
    let record = controller.store().get(&id).unwrap();
    assert_eq!(record.stage, StageNumber::Two);
    assert_eq!(record.updates, 3);
}
