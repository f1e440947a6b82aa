//! Pure stage transition functions.
//!
//! Each function takes the current [`StageState`] by value and returns the
//! next one. The controller owns the state and threads it through these.

use im::Vector;
use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, StageNumber};
use crate::generator::GridGenerator;
use crate::validation::MatchResult;

use super::state::{FoundWord, StageState};

/// Result of ending a stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The next stage has begun.
    Next(StageState),
    /// That was the last stage.
    Finished { score: u32 },
}

/// Begin `stage`: generate its grid, reset the timer, clear found words.
///
/// The grid is drawn from the `stage-<n>` stream of `rng`, so it depends
/// only on the seed and the stage.
pub fn begin_stage(
    stage: StageNumber,
    config: &GameConfig,
    rng: &GameRng,
    carried_score: u32,
) -> StageState {
    let stage_config = config.stage(stage);
    let mut stream = rng.for_context(&stage.rng_context());
    let generated = GridGenerator::new(config.generator.clone()).generate(
        &stage_config.words,
        stage_config.grid_size,
        &mut stream,
    );

    info!(
        %stage,
        grid_size = stage_config.grid_size,
        placed = generated.placements.len(),
        skipped = generated.skipped.len(),
        "Stage started"
    );

    StageState {
        stage,
        words: stage_config.words.clone(),
        grid: generated.grid,
        placements: generated.placements,
        found: Vector::new(),
        remaining: stage_config.words.iter().cloned().collect(),
        time_remaining: config.round_duration(stage),
        score: carried_score,
    }
}

/// Record a match: the word leaves the remaining set and its points are
/// added. A word that is not remaining leaves the state unchanged.
pub fn record_match(mut state: StageState, found: MatchResult) -> StageState {
    if state.remaining.remove(&found.word).is_none() {
        debug!(word = %found.word, "Word not remaining, ignoring match");
        return state;
    }
    state.score = state.score.saturating_add(found.points);
    state.found.push_back(FoundWord {
        word: found.word,
        cells: found.cells,
    });
    state
}

/// One second of the stage timer.
pub fn tick(mut state: StageState) -> StageState {
    state.time_remaining = state.time_remaining.saturating_sub(1);
    state
}

/// End the current stage, whether cleared or timed out.
pub fn advance(state: StageState, config: &GameConfig, rng: &GameRng) -> Advance {
    match state.stage.next() {
        Some(next) => Advance::Next(begin_stage(next, config, rng, state.score)),
        None => Advance::Finished { score: state.score },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StageConfig, Word};
    use crate::generator::{FillerAlphabet, GeneratorConfig};
    use crate::selection::SelectionPath;

    fn config() -> GameConfig {
        GameConfig::new(
            StageConfig::new(["CAT", "DOG"], 8),
            StageConfig::new(["SUN"], 5).with_round_duration(30),
        )
        .with_round_duration(60)
        .with_generator(GeneratorConfig::default().with_filler(FillerAlphabet::latin()))
    }

    fn matched(word: &str) -> MatchResult {
        let word = Word::new(word);
        MatchResult {
            points: crate::validation::points_for(&word),
            word,
            cells: SelectionPath::new(),
        }
    }

    #[test]
    fn test_begin_stage() {
        let state = begin_stage(StageNumber::One, &config(), &GameRng::new(1), 0);
        assert_eq!(state.stage(), StageNumber::One);
        assert_eq!(state.grid().size(), 8);
        assert_eq!(state.remaining().len(), 2);
        assert_eq!(state.time_remaining(), 60);
        assert_eq!(state.time_label(), "1:00");
        assert_eq!(state.progress(), (0, 2));
    }

    #[test]
    fn test_begin_stage_is_deterministic() {
        let a = begin_stage(StageNumber::Two, &config(), &GameRng::new(5), 0);
        let b = begin_stage(StageNumber::Two, &config(), &GameRng::new(5), 0);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_record_match() {
        let state = begin_stage(StageNumber::One, &config(), &GameRng::new(1), 10);
        let state = record_match(state, matched("CAT"));

        assert_eq!(state.score(), 40);
        assert!(state.is_found(&Word::new("CAT")));
        assert!(!state.remaining().contains(&Word::new("CAT")));
        assert!(!state.is_complete());

        let state = record_match(state, matched("DOG"));
        assert!(state.is_complete());
        assert_eq!(state.score(), 70);
    }

    #[test]
    fn test_record_match_is_idempotent() {
        let state = begin_stage(StageNumber::One, &config(), &GameRng::new(1), 0);
        let state = record_match(state, matched("CAT"));
        let state = record_match(state, matched("CAT"));
        assert_eq!(state.score(), 30);
        assert_eq!(state.found().len(), 1);
    }

    #[test]
    fn test_tick_saturates() {
        let mut state = begin_stage(StageNumber::Two, &config(), &GameRng::new(1), 0);
        assert_eq!(state.time_remaining(), 30);
        for _ in 0..40 {
            state = tick(state);
        }
        assert_eq!(state.time_remaining(), 0);
    }

    #[test]
    fn test_advance_carries_score() {
        let state = begin_stage(StageNumber::One, &config(), &GameRng::new(1), 0);
        let state = record_match(state, matched("DOG"));

        match advance(state, &config(), &GameRng::new(1)) {
            Advance::Next(next) => {
                assert_eq!(next.stage(), StageNumber::Two);
                assert_eq!(next.score(), 30);
                assert!(next.found().is_empty());
                assert_eq!(next.time_remaining(), 30);
            }
            Advance::Finished { .. } => panic!("expected stage 2"),
        }
    }

    #[test]
    fn test_advance_from_last_stage_finishes() {
        let state = begin_stage(StageNumber::Two, &config(), &GameRng::new(1), 55);
        assert_eq!(
            advance(state, &config(), &GameRng::new(1)),
            Advance::Finished { score: 55 }
        );
    }
}
