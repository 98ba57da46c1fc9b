//! Study session state machine.
//!
//! Per-card state is encoded by `(answer_submitted, show_answer)`:
//!
//! | state              | submitted | shown |
//! |--------------------|-----------|-------|
//! | Unanswered         | false     | false |
//! | Answered, hidden   | true      | false |
//! | Answered, revealed | true      | true  |
//!
//! `submit` moves Unanswered -> Answered, `toggle_reveal` flips between the
//! two answered states, and navigation always lands on Unanswered. Submission
//! never reveals the answer by itself.

use crate::error::DecodeError;
use crate::grading::{grade, Outcome};
use crate::types::{Card, Deck, Letter};
use serde::{Deserialize, Serialize};

/// Handle for one upload in flight. Only the most recently issued ticket
/// may install its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTicket(u64);

/// What happened to a finished upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    Installed { cards: usize },
    Stale,
}

/// Mutable state of one study session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    deck: Deck,
    current_index: usize,
    selected: Vec<Letter>,
    answer_submitted: bool,
    show_answer: bool,
    correct_count: u32,
    attempt_count: u32,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck and reset everything, score included.
    pub fn load_deck(&mut self, deck: Deck) {
        let generation = self.generation + 1;
        tracing::debug!(cards = deck.len(), "installing deck");
        *self = Self {
            deck,
            generation,
            ..Self::default()
        };
    }

    /// Start tracking a new upload. Any earlier ticket becomes stale.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.generation += 1;
        UploadTicket(self.generation)
    }

    /// Install the result of a finished upload if its ticket is still current.
    ///
    /// A stale result is discarded whether it succeeded or not. A current
    /// failure is returned and leaves the session untouched.
    pub fn commit_upload(
        &mut self,
        ticket: UploadTicket,
        decoded: Result<Deck, DecodeError>,
    ) -> Result<UploadOutcome, DecodeError> {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale upload"
            );
            return Ok(UploadOutcome::Stale);
        }

        let deck = decoded?;
        let cards = deck.len();
        // Loading advances the generation, so this ticket cannot commit twice.
        self.load_deck(deck);
        Ok(UploadOutcome::Installed { cards })
    }

    /// Advance one card. No-op on the last card.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.deck.len() {
            self.current_index += 1;
            self.reset_card_state();
            true
        } else {
            false
        }
    }

    /// Go back one card. No-op on the first card.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.reset_card_state();
            true
        } else {
            false
        }
    }

    /// Check or uncheck an option on the current card.
    ///
    /// Adding is capped at the required count only for single-answer cards;
    /// multi-answer cards accept any number of selections. Removing is
    /// always allowed. Returns whether the selection changed.
    pub fn toggle_selection(&mut self, letter: impl Into<Letter>) -> bool {
        let letter = letter.into();
        if self.answer_submitted {
            return false;
        }
        let Some(card) = self.deck.get(self.current_index) else {
            return false;
        };

        if let Some(pos) = self.selected.iter().position(|l| *l == letter) {
            self.selected.remove(pos);
            return true;
        }

        let required = card.required_selection_count();
        if required > 1 || self.selected.len() < required {
            self.selected.push(letter);
            true
        } else {
            false
        }
    }

    /// Lock in the current selection and grade it.
    ///
    /// Returns `None` when nothing is selected or the card was already
    /// submitted.
    pub fn submit(&mut self) -> Option<Outcome> {
        if self.selected.is_empty() || self.answer_submitted {
            return None;
        }
        let card = self.deck.get(self.current_index)?;
        let outcome = grade(card, &self.selected);

        self.attempt_count += 1;
        if outcome.is_correct() {
            self.correct_count += 1;
        }
        self.answer_submitted = true;
        tracing::debug!(
            index = self.current_index,
            ?outcome,
            correct = self.correct_count,
            attempts = self.attempt_count,
            "graded submission"
        );
        Some(outcome)
    }

    /// Show or hide the answer key. Only applies after submission.
    pub fn toggle_reveal(&mut self) -> bool {
        if !self.answer_submitted {
            return false;
        }
        self.show_answer = !self.show_answer;
        true
    }

    fn reset_card_state(&mut self) {
        self.selected.clear();
        self.answer_submitted = false;
        self.show_answer = false;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Position in the deck, `None` while the deck is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.deck.is_empty()).then_some(self.current_index)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current_index)
    }

    /// Selected letters in the order they were picked.
    pub fn selected_letters(&self) -> &[Letter] {
        &self.selected
    }

    pub fn is_selected(&self, letter: Letter) -> bool {
        self.selected.contains(&letter)
    }

    pub fn answer_submitted(&self) -> bool {
        self.answer_submitted
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Accuracy as a rounded percentage, 0 before any attempt.
    pub fn score(&self) -> u32 {
        if self.attempt_count == 0 {
            return 0;
        }
        (f64::from(self.correct_count) / f64::from(self.attempt_count) * 100.0).round() as u32
    }

    pub fn is_first_card(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_card(&self) -> bool {
        self.deck.is_empty() || self.current_index + 1 == self.deck.len()
    }

    /// Grade of the submitted selection on the current card.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.answer_submitted {
            return None;
        }
        self.current_card().map(|card| grade(card, &self.selected))
    }
}
