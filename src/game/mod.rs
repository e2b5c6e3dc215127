//! Headless game logic
//!
//! Round state and guess evaluation. Nothing in here knows about rendering
//! or the DOM; the controller pushes results out to a [`View`](crate::view::View).

pub mod evaluator;
pub mod round;
pub mod state;

pub use evaluator::{GuessReport, Outcome, RoundFinished, ScoreResult, evaluate_guess};
pub use round::{GuessRange, Round, RoundPhase};
pub use state::{GameState, HistoryEntry};
