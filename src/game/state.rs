//! Game state: the current round plus its guess history

use rand::Rng;

use super::evaluator::Outcome;
use super::round::{GuessRange, Round};

/// One past guess, as shown in the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: u32,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub round: Round,
    /// Newest first
    history: Vec<HistoryEntry>,
}

impl GameState {
    pub fn new(round: Round) -> Self {
        Self {
            round,
            history: Vec::new(),
        }
    }

    /// Replace the round wholesale and forget its history
    pub fn start_round<R: Rng>(&mut self, range: GuessRange, rng: &mut R) {
        self.round = Round::new(range, rng);
        self.history.clear();
        log::info!("New round started (range {}..={})", range.min, range.max);
    }

    /// Past guesses of the current round, newest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub(crate) fn push_history(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundPhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_history_is_newest_first() {
        let mut state = GameState::new(Round::with_target(50));
        state.push_history(HistoryEntry {
            guess: 10,
            outcome: Outcome::TooLow,
        });
        state.push_history(HistoryEntry {
            guess: 75,
            outcome: Outcome::TooHigh,
        });
        assert_eq!(state.history()[0].guess, 75);
        assert_eq!(state.history()[1].guess, 10);
    }

    #[test]
    fn test_start_round_resets_everything() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(Round::with_target(3));
        state.round.record_attempt();
        state.round.finish();
        state.push_history(HistoryEntry {
            guess: 3,
            outcome: Outcome::Correct,
        });

        state.start_round(GuessRange::default(), &mut rng);
        assert_eq!(state.round.attempts(), 0);
        assert_eq!(state.round.phase(), RoundPhase::Active);
        assert!(state.history().is_empty());
    }
}
