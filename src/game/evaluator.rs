//! Guess evaluation
//!
//! Callers must validate the guess against the configured range first; an
//! out-of-range guess is simply compared like any other number.

use super::state::{GameState, HistoryEntry};
use crate::persistence::{BestScoreStore, KeyValueStore};

/// Classification of a guess against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    /// Guess below target: go bigger
    TooLow,
    /// Guess above target: go smaller
    TooHigh,
}

impl Outcome {
    /// Label shown next to the guess in the history list
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Correct => "🎯 Correct",
            Outcome::TooLow => "Go bigger",
            Outcome::TooHigh => "Go smaller",
        }
    }
}

/// What a winning guess did to the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreResult {
    /// No best score existed, or this round beat it; it has been saved
    NewRecord,
    /// Stored best score was as good or better and was kept
    Cleared { best: u32 },
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: u32,
    pub outcome: Outcome,
    /// Attempt count after this guess
    pub attempts: u32,
    /// Set only when `outcome` is `Correct`
    pub score: Option<ScoreResult>,
}

/// Guess submitted after the round already finished
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("round is already finished")]
pub struct RoundFinished;

/// Evaluate `guess` against the current round
///
/// Counts the attempt, records a history entry and, on a correct guess,
/// finishes the round and updates the best score if it was strictly beaten.
pub fn evaluate_guess<S: KeyValueStore>(
    state: &mut GameState,
    guess: u32,
    best: &mut BestScoreStore<S>,
) -> Result<GuessReport, RoundFinished> {
    if state.round.is_finished() {
        return Err(RoundFinished);
    }

    let attempts = state.round.record_attempt();
    let target = state.round.target();

    let outcome = if guess == target {
        Outcome::Correct
    } else if guess < target {
        Outcome::TooLow
    } else {
        Outcome::TooHigh
    };

    let score = if outcome == Outcome::Correct {
        state.round.finish();
        Some(update_best(attempts, best))
    } else {
        None
    };

    state.push_history(HistoryEntry { guess, outcome });
    log::debug!("Guess {guess}: {outcome:?} (attempt {attempts})");

    Ok(GuessReport {
        guess,
        outcome,
        attempts,
        score,
    })
}

fn update_best<S: KeyValueStore>(attempts: u32, best: &mut BestScoreStore<S>) -> ScoreResult {
    match best.load() {
        // Ties keep the old record
        Some(current) if attempts >= current => ScoreResult::Cleared { best: current },
        _ => {
            best.save(attempts);
            ScoreResult::NewRecord
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Round, RoundPhase};
    use crate::persistence::{Capability, MemoryStore};
    use proptest::prelude::*;

    const KEY: &str = "best";

    fn best_store() -> BestScoreStore<MemoryStore> {
        BestScoreStore::probed(MemoryStore::new(), KEY)
    }

    fn best_store_with(score: u32) -> BestScoreStore<MemoryStore> {
        let mut best = best_store();
        best.save(score);
        best
    }

    /// Play guesses until the round finishes with exactly `attempts` tries
    fn finish_in(
        state: &mut GameState,
        attempts: u32,
        best: &mut BestScoreStore<MemoryStore>,
    ) -> GuessReport {
        let target = state.round.target();
        let wrong = (1..=100).filter(|g| *g != target);
        for guess in wrong.take(attempts as usize - 1) {
            evaluate_guess(state, guess, best).unwrap();
        }
        evaluate_guess(state, target, best).unwrap()
    }

    #[test]
    fn test_scenario_sequence_to_fifty() {
        let mut state = GameState::new(Round::with_target(50));
        let mut best = best_store();

        let outcomes: Vec<Outcome> = [10, 75, 60, 55, 50]
            .into_iter()
            .map(|g| evaluate_guess(&mut state, g, &mut best).unwrap().outcome)
            .collect();

        assert_eq!(
            outcomes,
            vec![
                Outcome::TooLow,
                Outcome::TooHigh,
                Outcome::TooHigh,
                Outcome::TooHigh,
                Outcome::Correct,
            ]
        );
        assert_eq!(state.round.attempts(), 5);
        assert_eq!(state.round.phase(), RoundPhase::Finished);
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.history()[0].outcome, Outcome::Correct);
        assert_eq!(state.history()[4].guess, 10);
    }

    #[test]
    fn test_first_win_sets_record() {
        let mut state = GameState::new(Round::with_target(30));
        let mut best = best_store();

        let report = finish_in(&mut state, 7, &mut best);
        assert_eq!(report.attempts, 7);
        assert_eq!(report.score, Some(ScoreResult::NewRecord));
        assert_eq!(best.load(), Some(7));
    }

    #[test]
    fn test_worse_round_keeps_record() {
        let mut state = GameState::new(Round::with_target(30));
        let mut best = best_store_with(5);

        let report = finish_in(&mut state, 8, &mut best);
        assert_eq!(report.score, Some(ScoreResult::Cleared { best: 5 }));
        assert_eq!(best.load(), Some(5));
    }

    #[test]
    fn test_tie_is_not_a_record() {
        let mut state = GameState::new(Round::with_target(30));
        let mut best = best_store_with(4);

        let report = finish_in(&mut state, 4, &mut best);
        assert_eq!(report.score, Some(ScoreResult::Cleared { best: 4 }));
        assert_eq!(best.load(), Some(4));
    }

    #[test]
    fn test_better_round_replaces_record() {
        let mut state = GameState::new(Round::with_target(30));
        let mut best = best_store_with(9);

        let report = finish_in(&mut state, 3, &mut best);
        assert_eq!(report.score, Some(ScoreResult::NewRecord));
        assert_eq!(best.load(), Some(3));
    }

    #[test]
    fn test_unavailable_storage_is_not_written() {
        let mut store = MemoryStore::new();
        store.set_item(KEY, "2").unwrap();
        let mut best = BestScoreStore::new(store, KEY, Capability::Unavailable);
        let mut state = GameState::new(Round::with_target(30));

        let report = finish_in(&mut state, 6, &mut best);
        // Nothing readable, so the round counts as a record for display...
        assert_eq!(report.score, Some(ScoreResult::NewRecord));
        // ...but the store itself was never touched
        assert_eq!(best.store().get_item(KEY).unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_finished_round_rejects_guess() {
        let mut state = GameState::new(Round::with_target(50));
        let mut best = best_store();
        evaluate_guess(&mut state, 50, &mut best).unwrap();

        assert_eq!(evaluate_guess(&mut state, 50, &mut best), Err(RoundFinished));
        assert_eq!(state.round.attempts(), 1);
        assert_eq!(state.history().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_correct_guess_finishes(target in 1u32..=100, prior in 0u32..20) {
            let mut state = GameState::new(Round::with_target(target));
            let mut best = best_store();
            let wrong = if target == 1 { 2 } else { 1 };
            for _ in 0..prior {
                evaluate_guess(&mut state, wrong, &mut best).unwrap();
            }

            let before = state.round.attempts();
            let report = evaluate_guess(&mut state, target, &mut best).unwrap();
            prop_assert_eq!(report.outcome, Outcome::Correct);
            prop_assert_eq!(state.round.attempts(), before + 1);
            prop_assert!(state.round.is_finished());
        }

        #[test]
        fn prop_hints_point_at_target(target in 2u32..=99, low_off in 1u32..=98, high_off in 1u32..=98) {
            let low = target.saturating_sub(low_off).max(1);
            let high = (target + high_off).min(100);
            let mut state = GameState::new(Round::with_target(target));
            let mut best = best_store();

            let r = evaluate_guess(&mut state, low, &mut best).unwrap();
            prop_assert_eq!(r.outcome, Outcome::TooLow);
            let r = evaluate_guess(&mut state, high, &mut best).unwrap();
            prop_assert_eq!(r.outcome, Outcome::TooHigh);
            prop_assert!(!state.round.is_finished());
            prop_assert!(best.load().is_none());
        }
    }
}
