//! Read-only snapshot of a session for the presentation layer.
//!
//! Everything here is recomputed from the session on each call.

use crate::grading::Outcome;
use crate::session::Session;
use crate::types::Letter;
use serde::{Deserialize, Serialize};

/// Action bound to the combined Submit / Show / Hide button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    Submit,
    ShowAnswer,
    HideAnswer,
}

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub letter: Letter,
    pub text: String,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub question: String,
    pub options: Vec<OptionView>,
    pub multi_select: bool,
    pub required_selections: usize,
    /// Count from a `(Choose N)` directive in the question text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stated_choices: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub card: Option<CardView>,
    /// 1-based position, 0 while the deck is empty.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub correct_count: u32,
    pub attempt_count: u32,
    pub answer_submitted: bool,
    pub show_answer: bool,
    pub selected: Vec<Letter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_answer: Option<String>,
    pub can_previous: bool,
    pub can_next: bool,
    pub primary_action: PrimaryAction,
    pub primary_enabled: bool,
}

impl Session {
    pub fn view(&self) -> SessionView {
        let submitted = self.answer_submitted();
        let card = self.current_card();

        let card_view = card.map(|card| CardView {
            question: card.question().to_string(),
            options: card
                .options()
                .into_iter()
                .map(|option| OptionView {
                    checked: self.is_selected(option.letter),
                    disabled: submitted,
                    letter: option.letter,
                    text: option.text,
                })
                .collect(),
            multi_select: card.is_multi_select(),
            required_selections: card.required_selection_count(),
            stated_choices: card.stated_choice_count(),
        });

        let revealed_answer = card
            .filter(|_| self.show_answer())
            .map(|card| card.answer_key());

        SessionView {
            card: card_view,
            position: self.current_index().map_or(0, |idx| idx + 1),
            total: self.deck().len(),
            score: self.score(),
            correct_count: self.correct_count(),
            attempt_count: self.attempt_count(),
            answer_submitted: submitted,
            show_answer: self.show_answer(),
            selected: self.selected_letters().to_vec(),
            feedback: self.outcome(),
            revealed_answer,
            can_previous: !self.is_first_card(),
            can_next: !self.is_last_card(),
            primary_action: self.primary_action(),
            primary_enabled: !(self.selected_letters().is_empty() && !submitted),
        }
    }

    /// What the combined button does right now.
    pub fn primary_action(&self) -> PrimaryAction {
        match (self.answer_submitted(), self.show_answer()) {
            (false, _) => PrimaryAction::Submit,
            (true, false) => PrimaryAction::ShowAnswer,
            (true, true) => PrimaryAction::HideAnswer,
        }
    }

    /// Press the combined button: submit before grading, toggle reveal after.
    /// Returns whether anything changed.
    pub fn press_primary(&mut self) -> bool {
        match self.primary_action() {
            PrimaryAction::Submit => self.submit().is_some(),
            PrimaryAction::ShowAnswer | PrimaryAction::HideAnswer => self.toggle_reveal(),
        }
    }
}
