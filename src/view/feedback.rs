//! Feedback messages and their tone

use std::fmt;

use crate::game::GuessRange;

/// Visual tone of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
}

impl Tone {
    /// Value for the `data-tone` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
        }
    }
}

/// The fixed message set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    RoundStarted,
    TooLow { guess: u32, attempts: u32 },
    TooHigh { guess: u32, attempts: u32 },
    NewRecord { attempts: u32 },
    Cleared { attempts: u32 },
    RoundOver,
    InvalidGuess { range: GuessRange },
    BestScoreReset,
}

impl Feedback {
    pub fn tone(&self) -> Tone {
        match self {
            Feedback::RoundStarted
            | Feedback::TooLow { .. }
            | Feedback::TooHigh { .. }
            | Feedback::BestScoreReset => Tone::Info,
            Feedback::NewRecord { .. } | Feedback::Cleared { .. } => Tone::Success,
            Feedback::RoundOver | Feedback::InvalidGuess { .. } => Tone::Warning,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::RoundStarted => write!(f, "A new round has started. Take a guess!"),
            Feedback::TooLow { guess, attempts } => {
                write!(f, "{guess} is too low. Go bigger! (attempt {attempts})")
            }
            Feedback::TooHigh { guess, attempts } => {
                write!(f, "{guess} is too high. Go smaller! (attempt {attempts})")
            }
            Feedback::NewRecord { attempts } => {
                write!(f, "Correct! New best score ({attempts} attempts).")
            }
            Feedback::Cleared { attempts } => {
                write!(f, "Correct! Cleared this round in {attempts} attempts.")
            }
            Feedback::RoundOver => write!(
                f,
                "This round is over. Press \"New round\" to play again."
            ),
            Feedback::InvalidGuess { range } => write!(
                f,
                "Enter a whole number from {} to {}.",
                range.min, range.max
            ),
            Feedback::BestScoreReset => write!(f, "Best score has been reset."),
        }
    }
}
