//! Core types for the flashcard study session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Option identifier derived from an option's position (0 -> A, 1 -> B, ...).
///
/// Always stored upper-case; comparisons against answer keys are
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(char);

impl Letter {
    pub fn new(c: char) -> Self {
        Self(c.to_ascii_uppercase())
    }

    /// Letter for the option at a 0-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        let code = u32::try_from(index).ok()?.checked_add(u32::from(b'A'))?;
        char::from_u32(code).map(Self)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Lower-case form used when matching against an answer key.
    pub fn to_key(self) -> String {
        self.0.to_lowercase().collect()
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the uploaded table, mapped positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub question: String,
    pub possible_answers: String,
    pub correct_answer: String,
}

impl RawRow {
    pub fn is_blank(&self) -> bool {
        self.question.is_empty() && self.possible_answers.is_empty() && self.correct_answer.is_empty()
    }
}

/// A selectable answer option of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub letter: Letter,
    pub text: String,
}

/// One flashcard. Fields keep the uploaded text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    question: String,
    possible_answers: String,
    correct_answer: String,
}

impl Card {
    pub fn new(
        question: impl Into<String>,
        possible_answers: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            possible_answers: possible_answers.into(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn possible_answers(&self) -> &str {
        &self.possible_answers
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Options in display order, lettered by position.
    pub fn options(&self) -> Vec<AnswerOption> {
        self.possible_answers
            .split(',')
            .enumerate()
            .filter_map(|(idx, text)| {
                Letter::from_index(idx).map(|letter| AnswerOption {
                    letter,
                    text: text.trim().to_string(),
                })
            })
            .collect()
    }

    /// Answer key entries, trimmed and lower-cased, in key order.
    pub fn correct_letters(&self) -> Vec<String> {
        self.correct_answer
            .split(',')
            .map(|a| a.trim().to_lowercase())
            .collect()
    }

    /// Number of comma-separated entries in the answer key.
    ///
    /// An empty key still splits into one (empty) entry.
    pub fn required_selection_count(&self) -> usize {
        self.correct_answer.split(',').count()
    }

    pub fn is_multi_select(&self) -> bool {
        self.required_selection_count() > 1
    }

    /// Answer key as shown on reveal, e.g. `"A, C"`.
    pub fn answer_key(&self) -> String {
        self.correct_answer
            .split(',')
            .map(|a| a.trim().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Count from a trailing `(Choose N)` in the question, if present.
    ///
    /// Informational only; grading uses `required_selection_count`.
    pub fn stated_choice_count(&self) -> Option<usize> {
        let body = self.question.trim_end().strip_suffix(')')?;
        let open = body.rfind('(')?;
        let inner = body[open + 1..].trim();
        let word = inner.get(..6)?;
        if !word.eq_ignore_ascii_case("choose") {
            return None;
        }
        inner[6..].trim().parse().ok()
    }
}

impl From<RawRow> for Card {
    fn from(row: RawRow) -> Self {
        Self {
            question: row.question,
            possible_answers: row.possible_answers,
            correct_answer: row.correct_answer,
        }
    }
}

/// Ordered, immutable collection of cards from one upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Options applied when turning an upload into a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSettings {
    /// Drop the first row. Off by default: row 0 is treated as a card.
    #[serde(default)]
    pub skip_header_row: bool,
    /// Reject uploads larger than this many bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(q: &str, options: &str, key: &str) -> Card {
        Card::new(q, options, key)
    }

    #[test]
    fn letters_follow_position() {
        assert_eq!(Letter::from_index(0), Some(Letter::new('A')));
        assert_eq!(Letter::from_index(2), Some(Letter::new('C')));
        assert_eq!(Letter::new('b').as_char(), 'B');
        assert_eq!(Letter::new('B').to_key(), "b");
    }

    #[test]
    fn options_are_trimmed_and_lettered() {
        let c = card("2+2?", "3, 4 ,5", "b");
        assert_eq!(
            c.options(),
            vec![
                AnswerOption { letter: Letter::new('A'), text: "3".into() },
                AnswerOption { letter: Letter::new('B'), text: "4".into() },
                AnswerOption { letter: Letter::new('C'), text: "5".into() },
            ]
        );
    }

    #[test]
    fn required_count_comes_from_answer_key() {
        assert_eq!(card("q (Choose 3)", "x,y,z", "a,c").required_selection_count(), 2);
        assert!(card("q", "x,y,z", "a, c").is_multi_select());
        assert!(!card("q", "x,y,z", "b").is_multi_select());
        assert_eq!(card("q", "", "").required_selection_count(), 1);
    }

    #[test]
    fn correct_letters_are_normalized() {
        assert_eq!(card("q", "x,y", " A , b").correct_letters(), vec!["a", "b"]);
    }

    #[test]
    fn answer_key_is_upper_case_list() {
        assert_eq!(card("q", "x,y,z", "a, c").answer_key(), "A, C");
        assert_eq!(card("q", "x", "b").answer_key(), "B");
    }

    #[test]
    fn stated_choice_count_parses_trailing_directive() {
        assert_eq!(card("Pick primes (Choose 2)", "", "").stated_choice_count(), Some(2));
        assert_eq!(card("Pick primes (choose 3)  ", "", "").stated_choice_count(), Some(3));
        assert_eq!(card("Pick primes", "", "").stated_choice_count(), None);
        assert_eq!(card("Pick (any) primes", "", "").stated_choice_count(), None);
        assert_eq!(card("Pick (Choose two)", "", "").stated_choice_count(), None);
    }

    #[test]
    fn card_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(card("q", "x,y", "a")).unwrap();
        assert_eq!(json["possibleAnswers"], "x,y");
        assert_eq!(json["correctAnswer"], "a");
    }

    #[test]
    fn blank_row_detection() {
        assert!(RawRow::default().is_blank());
        assert!(!RawRow { question: "q".into(), ..RawRow::default() }.is_blank());
    }
}
