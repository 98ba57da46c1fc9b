//! Grading of a submitted selection against a card's answer key.

use crate::types::{Card, Letter};
use serde::{Deserialize, Serialize};

/// Result of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl From<bool> for Outcome {
    fn from(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }
}

/// Grade `selected` against an answer key such as `"a, c"`.
///
/// Correct iff the selection has as many letters as the key has entries
/// (repeats included) and every selected letter appears in the key,
/// ignoring case.
pub fn grade_selection(correct_answer: &str, selected: &[Letter]) -> Outcome {
    let key: Vec<String> = correct_answer
        .split(',')
        .map(|a| a.trim().to_lowercase())
        .collect();
    grade_key(&key, selected)
}

/// Grade `selected` against `card`'s answer key.
pub fn grade(card: &Card, selected: &[Letter]) -> Outcome {
    grade_key(&card.correct_letters(), selected)
}

fn grade_key(key: &[String], selected: &[Letter]) -> Outcome {
    let is_correct = selected.len() == key.len()
        && selected.iter().all(|letter| key.contains(&letter.to_key()));
    Outcome::from(is_correct)
}
