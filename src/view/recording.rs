//! Headless view that records what would be on screen

use super::{Feedback, View};
use crate::game::HistoryEntry;

#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub attempts: u32,
    pub best_score: Option<u32>,
    pub feedback: Option<Feedback>,
    /// Newest first, like the rendered list
    pub history: Vec<HistoryEntry>,
    pub input_enabled: bool,
    pub input_cleared: u32,
    pub focus_count: u32,
    pub select_count: u32,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for RecordingView {
    fn show_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
    }

    fn show_best_score(&mut self, best: Option<u32>) {
        self.best_score = best;
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback = Some(*feedback);
    }

    fn prepend_history(&mut self, entry: &HistoryEntry) {
        self.history.insert(0, *entry);
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn clear_input(&mut self) {
        self.input_cleared += 1;
    }

    fn focus_input(&mut self) {
        self.focus_count += 1;
    }

    fn select_input(&mut self) {
        self.select_count += 1;
    }
}
