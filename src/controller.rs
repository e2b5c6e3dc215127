//! Input controller
//!
//! Entry point for the three user actions: submit a guess, start a new
//! round, reset the best score. Raw input is validated here before it
//! reaches the evaluator; every rejection becomes a warning on the view.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::game::{
    GameState, GuessRange, GuessReport, HistoryEntry, Outcome, Round, RoundFinished, ScoreResult,
    evaluate_guess,
};
use crate::persistence::{BestScoreStore, KeyValueStore};
use crate::view::{Feedback, View};

/// Why raw guess text was rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInputError {
    /// Empty, non-numeric or fractional text
    #[error("guess is not a whole number")]
    NotANumber,
    #[error("{value} is outside {min}..={max}", min = .range.min, max = .range.max)]
    OutOfRange { value: i64, range: GuessRange },
}

/// Why a submission had no effect
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    RoundOver(#[from] RoundFinished),
    #[error("invalid guess: {0}")]
    Invalid(#[from] GuessInputError),
}

/// Parse raw input text into a guess within `range`
pub fn parse_guess(raw: &str, range: GuessRange) -> Result<u32, GuessInputError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| GuessInputError::NotANumber)?;

    if !range.contains(value) {
        return Err(GuessInputError::OutOfRange { value, range });
    }

    u32::try_from(value).map_err(|_| GuessInputError::OutOfRange { value, range })
}

/// Owns the round, the best score adapter and the view
pub struct GameController<S, V> {
    config: GameConfig,
    state: GameState,
    best: BestScoreStore<S>,
    view: V,
    rng: Pcg32,
}

impl<S: KeyValueStore, V: View> GameController<S, V> {
    /// Render the stored best score and start the first round
    pub fn new(config: GameConfig, best: BestScoreStore<S>, view: V, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(Round::new(config.range, &mut rng));

        let mut controller = Self {
            config,
            state,
            best,
            view,
            rng,
        };
        let best = controller.best.load();
        controller.view.show_best_score(best);
        controller.new_round();
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn best_scores(&self) -> &BestScoreStore<S> {
        &self.best
    }

    pub fn best_scores_mut(&mut self) -> &mut BestScoreStore<S> {
        &mut self.best
    }

    /// Handle a guess form submission
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, SubmitError> {
        if self.state.round.is_finished() {
            self.view.show_feedback(&Feedback::RoundOver);
            return Err(RoundFinished.into());
        }

        let guess = match parse_guess(raw, self.config.range) {
            Ok(guess) => guess,
            Err(e) => {
                log::debug!("Rejected guess {raw:?}: {e}");
                self.view.show_feedback(&Feedback::InvalidGuess {
                    range: self.config.range,
                });
                self.view.select_input();
                return Err(e.into());
            }
        };

        let report = evaluate_guess(&mut self.state, guess, &mut self.best)?;
        self.render_report(&report);

        self.view.focus_input();
        self.view.select_input();
        Ok(report)
    }

    /// Replace the round with a fresh one
    pub fn new_round(&mut self) {
        self.state.start_round(self.config.range, &mut self.rng);

        self.view.show_attempts(0);
        self.view.show_feedback(&Feedback::RoundStarted);
        self.view.clear_history();
        self.view.clear_input();
        self.view.set_input_enabled(true);
        self.view.focus_input();
    }

    /// Forget the persisted best score
    pub fn reset_best_score(&mut self) {
        self.best.clear();

        self.view.show_best_score(None);
        self.view.show_feedback(&Feedback::BestScoreReset);
        self.view.focus_input();
    }

    fn render_report(&mut self, report: &GuessReport) {
        let GuessReport {
            guess,
            outcome,
            attempts,
            score,
        } = *report;

        self.view.show_attempts(attempts);
        self.view.prepend_history(&HistoryEntry { guess, outcome });

        let feedback = match (outcome, score) {
            (Outcome::TooLow, _) => Feedback::TooLow { guess, attempts },
            (Outcome::TooHigh, _) => Feedback::TooHigh { guess, attempts },
            (Outcome::Correct, Some(ScoreResult::Cleared { .. })) => {
                Feedback::Cleared { attempts }
            }
            (Outcome::Correct, _) => {
                self.view.show_best_score(Some(attempts));
                Feedback::NewRecord { attempts }
            }
        };

        if outcome == Outcome::Correct {
            self.view.set_input_enabled(false);
            log::info!("Round won in {attempts} attempts");
        }
        self.view.show_feedback(&feedback);
    }
}
