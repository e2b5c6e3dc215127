//! Plain stdout view for the native build

use super::{Feedback, Tone, View, format_best_score};
use crate::game::HistoryEntry;

#[derive(Debug, Default)]
pub struct TerminalView {
    input_enabled: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }
}

impl View for TerminalView {
    fn show_attempts(&mut self, attempts: u32) {
        println!("Attempts: {attempts}");
    }

    fn show_best_score(&mut self, best: Option<u32>) {
        println!("Best: {}", format_best_score(best));
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        let marker = match feedback.tone() {
            Tone::Info => "  ",
            Tone::Success => "✓ ",
            Tone::Warning => "! ",
        };
        println!("{marker}{feedback}");
    }

    fn prepend_history(&mut self, entry: &HistoryEntry) {
        println!("  {:>3}  {}", entry.guess, entry.outcome.label());
    }

    fn clear_history(&mut self) {}

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    // Line input has nothing to clear, focus or select
    fn clear_input(&mut self) {}
    fn focus_input(&mut self) {}
    fn select_input(&mut self) {}
}
