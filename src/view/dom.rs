//! DOM-backed view

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use super::{Feedback, View, format_best_score};
use crate::game::HistoryEntry;

/// Element ids the page must provide
pub mod ids {
    pub const ATTEMPT_COUNT: &str = "attemptCount";
    pub const BEST_SCORE: &str = "bestScore";
    pub const FEEDBACK: &str = "feedback";
    pub const HISTORY_LIST: &str = "historyList";
    pub const GUESS_INPUT: &str = "guessInput";
    pub const GUESS_FORM: &str = "guessForm";
    pub const NEW_ROUND: &str = "newRound";
    pub const RESET_BEST: &str = "resetBest";
}

/// Missing or mistyped page element
#[derive(thiserror::Error, Debug)]
#[error("missing element #{0}")]
pub struct MissingElement(pub &'static str);

pub fn element(document: &Document, id: &'static str) -> Result<Element, MissingElement> {
    document.get_element_by_id(id).ok_or(MissingElement(id))
}

fn typed<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MissingElement> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| MissingElement(id))
}

pub struct DomView {
    document: Document,
    attempt_count: Element,
    best_score: Element,
    feedback: Element,
    history_list: Element,
    input: HtmlInputElement,
    form: HtmlFormElement,
}

impl DomView {
    pub fn from_document(document: &Document) -> Result<Self, MissingElement> {
        Ok(Self {
            document: document.clone(),
            attempt_count: element(document, ids::ATTEMPT_COUNT)?,
            best_score: element(document, ids::BEST_SCORE)?,
            feedback: element(document, ids::FEEDBACK)?,
            history_list: element(document, ids::HISTORY_LIST)?,
            input: typed(document, ids::GUESS_INPUT)?,
            form: typed(document, ids::GUESS_FORM)?,
        })
    }

    /// Current raw text of the guess field
    pub fn input_value(&self) -> String {
        self.input.value()
    }

    fn history_item(&self, entry: &HistoryEntry) -> Option<Element> {
        let item = self.document.create_element("li").ok()?;
        item.set_class_name("history__item");

        let guess = self.document.create_element("span").ok()?;
        guess.set_class_name("history__guess");
        guess.set_text_content(Some(&entry.guess.to_string()));

        let result = self.document.create_element("span").ok()?;
        result.set_class_name("history__result");
        result.set_text_content(Some(entry.outcome.label()));

        item.append_child(&guess).ok()?;
        item.append_child(&result).ok()?;
        Some(item)
    }
}

impl View for DomView {
    fn show_attempts(&mut self, attempts: u32) {
        self.attempt_count
            .set_text_content(Some(&attempts.to_string()));
    }

    fn show_best_score(&mut self, best: Option<u32>) {
        self.best_score
            .set_text_content(Some(&format_best_score(best)));
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.feedback.set_text_content(Some(&feedback.to_string()));
        let _ = self
            .feedback
            .set_attribute("data-tone", feedback.tone().as_str());
    }

    fn prepend_history(&mut self, entry: &HistoryEntry) {
        match self.history_item(entry) {
            Some(item) => {
                let _ = self.history_list.prepend_with_node_1(&item);
            }
            None => log::warn!("Could not build history entry for {}", entry.guess),
        }
    }

    fn clear_history(&mut self) {
        self.history_list.set_inner_html("");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input.set_disabled(!enabled);
    }

    fn clear_input(&mut self) {
        self.form.reset();
    }

    fn focus_input(&mut self) {
        let _ = self.input.focus();
    }

    fn select_input(&mut self) {
        self.input.select();
    }
}
