//! The assembled game: selection, validation and stage control behind one
//! event-driven facade.
//!
//! Hosts feed [`PointerEvent`]s and elapsed time, and render from the
//! accessors. Everything that happened comes back as [`GameEvent`]s.
//!
//! ```
//! use std::time::Duration;
//!
//! use rust_wordsearch::core::{GameConfig, StageConfig};
//! use rust_wordsearch::game::{GameEvent, WordSearchGame};
//! use rust_wordsearch::selection::PointerEvent;
//! use rust_wordsearch::stage::StageEvent;
//! use rust_wordsearch::storage::{MemoryStore, PlayerId};
//!
//! let config = GameConfig::new(StageConfig::new(["sky"], 5), StageConfig::new(["sea"], 5));
//! let mut game = WordSearchGame::start(config, &PlayerId::new("p1"), 42, MemoryStore::new());
//!
//! // Drag along the placed word.
//! let placement = game.state().unwrap().placements()[0].clone();
//! let cells = placement.positions();
//! let mut events = game.handle(PointerEvent::Press(cells[0]));
//! for &pos in &cells[1..] {
//!     events.extend(game.handle(PointerEvent::Enter(pos)));
//! }
//! events.extend(game.handle(PointerEvent::Release));
//!
//! assert!(events
//!     .iter()
//!     .any(|e| matches!(e, GameEvent::Stage(StageEvent::WordFound(_)))));
//! assert_eq!(game.score(), 30);
//!
//! game.elapse(Duration::from_millis(600));
//! assert_eq!(game.state().unwrap().grid().size(), 5);
//! ```

use std::time::Duration;

use tracing::{debug, trace};

use crate::core::GameConfig;
use crate::selection::{
    ClickAdapter, DragAdapter, InputAdapter, PointerEvent, SelectionPath, SelectionTracker,
    Transition,
};
use crate::snapshot::GameSnapshot;
use crate::stage::{Phase, StageController, StageEvent, StageState};
use crate::storage::{PlayerId, SessionStore};
use crate::validation::{Validation, WordValidator};

/// Something that happened in response to input or time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The selection changed.
    Selection(Transition),
    /// A committed selection spelled no remaining word.
    NoMatch { attempt: String },
    /// Stage progress.
    Stage(StageEvent),
}

/// A complete word-search game.
pub struct WordSearchGame<S: SessionStore> {
    controller: StageController<S>,
    tracker: SelectionTracker,
    click: ClickAdapter,
    drag: DragAdapter,
    validator: WordValidator,
}

impl<S: SessionStore> WordSearchGame<S> {
    /// Start a new game at stage 1.
    pub fn start(config: GameConfig, player: &PlayerId, seed: u64, store: S) -> Self {
        Self::from_controller(StageController::start(config, player, seed, store))
    }

    /// Resume a saved game. The in-progress selection is not saved.
    pub fn restore(config: GameConfig, store: S, snapshot: GameSnapshot) -> Self {
        Self::from_controller(StageController::restore(config, store, snapshot))
    }

    fn from_controller(controller: StageController<S>) -> Self {
        Self {
            controller,
            tracker: SelectionTracker::new(),
            click: ClickAdapter,
            drag: DragAdapter::new(),
            validator: WordValidator,
        }
    }

    /// Apply one pointer event. Ignored once the game is finished.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<GameEvent> {
        let Some(state) = self.controller.state() else {
            trace!(?event, "Game finished, ignoring input");
            return Vec::new();
        };

        let transition = if event.is_click() {
            self.click.handle(&mut self.tracker, state.grid(), event)
        } else {
            self.drag.handle(&mut self.tracker, state.grid(), event)
        };

        match transition {
            Transition::Committed(path) => self.submit(path),
            Transition::Ignored => Vec::new(),
            other => vec![GameEvent::Selection(other)],
        }
    }

    /// Advance game time.
    pub fn elapse(&mut self, delta: Duration) -> Vec<GameEvent> {
        let events = self.controller.elapse(delta);
        self.wrap(events)
    }

    /// One second of game time.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = self.controller.tick();
        self.wrap(events)
    }

    /// End the game now.
    pub fn finish_early(&mut self) -> Vec<GameEvent> {
        let events = self.controller.finish_early();
        self.wrap(events)
    }

    /// Capture a resumable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.controller.snapshot()
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionPath {
        self.tracker.path()
    }

    /// Active stage, unless finished.
    #[must_use]
    pub fn state(&self) -> Option<&StageState> {
        self.controller.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.controller.score()
    }

    /// The stage controller.
    #[must_use]
    pub fn controller(&self) -> &StageController<S> {
        &self.controller
    }

    fn submit(&mut self, path: SelectionPath) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::Selection(Transition::Committed(path.clone()))];
        let Some(state) = self.controller.state() else {
            return events;
        };

        match self.validator.validate(&path, state.remaining()) {
            Validation::Match(found) => {
                let stage_events = self.controller.on_match(found);
                events.extend(self.wrap(stage_events));
            }
            Validation::NoMatch => {
                let attempt = path.word();
                debug!(%attempt, "Selection matched nothing");
                events.push(GameEvent::NoMatch { attempt });
            }
        }
        events
    }

    /// Wrap controller events, dropping the selection when a new stage or
    /// the end of the game replaces the grid.
    fn wrap(&mut self, events: Vec<StageEvent>) -> Vec<GameEvent> {
        let grid_replaced = events
            .iter()
            .any(|e| matches!(e, StageEvent::StageStarted(_) | StageEvent::Finished { .. }));
        if grid_replaced {
            self.tracker.abandon();
            self.drag.reset();
        }
        events.into_iter().map(GameEvent::Stage).collect()
    }
}
