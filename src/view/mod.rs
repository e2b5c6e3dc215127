//! Presentation layer
//!
//! The controller decides what to show; a [`View`] only shows it.
//! - `dom`: the browser page (wasm only)
//! - `terminal`: stdout (native only)
//! - `recording`: headless, remembers every call

mod feedback;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use feedback::{Feedback, Tone};
pub use recording::RecordingView;

use crate::game::HistoryEntry;

/// Everything the game ever displays
pub trait View {
    fn show_attempts(&mut self, attempts: u32);
    fn show_best_score(&mut self, best: Option<u32>);
    fn show_feedback(&mut self, feedback: &Feedback);
    fn prepend_history(&mut self, entry: &HistoryEntry);
    fn clear_history(&mut self);

    // Guess input control
    fn set_input_enabled(&mut self, enabled: bool);
    fn clear_input(&mut self);
    fn focus_input(&mut self);
    fn select_input(&mut self);
}

/// Best score as displayed: `"<N> attempts"`, or a dash when unset
pub fn format_best_score(best: Option<u32>) -> String {
    match best {
        Some(score) => format!("{score} attempts"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_best_score() {
        assert_eq!(format_best_score(Some(7)), "7 attempts");
        assert_eq!(format_best_score(Some(0)), "0 attempts");
        assert_eq!(format_best_score(None), "-");
    }
}
