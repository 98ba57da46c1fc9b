//! Deck loader: uploaded table -> ordered deck.
//!
//! # Format
//! Three columns, read positionally, no header row:
//!
//! ```text
//! 2+2?,"3,4,5",b
//! Pick the primes (Choose 2),"4,5,7",b,c
//! ```
//!
//! Field contents are not validated. A row with missing cells still becomes
//! a card with empty text in those fields.

use crate::decode::decode_rows;
use crate::error::{DecodeError, Result};
use crate::types::{Card, Deck, LoadSettings, RawRow};

/// Decode an upload and build a deck with default settings.
pub fn parse(bytes: &[u8]) -> Result<Deck> {
    parse_with(bytes, &LoadSettings::default())
}

/// Decode an upload and build a deck.
pub fn parse_with(bytes: &[u8], settings: &LoadSettings) -> Result<Deck> {
    if let Some(limit) = settings.max_bytes {
        if bytes.len() > limit {
            return Err(DecodeError::TooLarge {
                size: bytes.len(),
                limit,
            });
        }
    }

    let rows = decode_rows(bytes)?;
    let deck = build_deck(rows, settings);
    tracing::debug!(cards = deck.len(), "parsed deck");
    Ok(deck)
}

/// One card per row, in row order.
pub fn build_deck(rows: Vec<RawRow>, settings: &LoadSettings) -> Deck {
    let skip = usize::from(settings.skip_header_row);
    rows.into_iter().skip(skip).map(Card::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &[u8] = b"Question,Possible Answers,Correct Answer\n\
2+2?,\"3,4,5\",b\n\
Pick the primes (Choose 2),\"4,5,7\",\"b,c\"\n";

    #[test]
    fn parse_keeps_row_order_and_header() {
        let deck = parse(SAMPLE).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0).unwrap().question(), "Question");
        assert_eq!(deck.get(1).unwrap(), &Card::new("2+2?", "3,4,5", "b"));
        assert_eq!(deck.get(2).unwrap().correct_answer(), "b,c");
    }

    #[test]
    fn skip_header_row_is_opt_in() {
        let settings = LoadSettings {
            skip_header_row: true,
            ..LoadSettings::default()
        };
        let deck = parse_with(SAMPLE, &settings).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().question(), "2+2?");
    }

    #[test]
    fn malformed_rows_still_become_cards() {
        let deck = parse(b"lonely question\n").unwrap();
        assert_eq!(deck.cards(), &[Card::new("lonely question", "", "")]);
    }

    #[test]
    fn empty_upload_is_empty_deck() {
        assert!(parse(b"").unwrap().is_empty());
    }

    #[test]
    fn reject_oversized_upload() {
        let settings = LoadSettings {
            max_bytes: Some(8),
            ..LoadSettings::default()
        };
        let result = parse_with(SAMPLE, &settings);
        assert!(matches!(result, Err(DecodeError::TooLarge { limit: 8, .. })));
    }

    #[test]
    fn build_deck_from_rows() {
        let rows = vec![
            RawRow {
                question: "q1".into(),
                possible_answers: "x,y".into(),
                correct_answer: "a".into(),
            },
            RawRow {
                question: "q2".into(),
                ..RawRow::default()
            },
        ];
        let deck = build_deck(rows, &LoadSettings::default());
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(1).unwrap().possible_answers(), "");
    }
}
