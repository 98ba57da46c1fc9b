//! Core flashcard quiz library used by the desktop host.
//!
//! Provides:
//! - Tabular decoding of uploaded CSV / spreadsheet files
//! - Deck loading (one card per row, no header skipping by default)
//! - Multiple-choice grading against comma-separated letter keys
//! - The study session state machine and its read-only view

pub mod decode;
pub mod error;
pub mod grading;
pub mod parser;
pub mod session;
pub mod types;
pub mod view;

pub use decode::{decode_rows, detect_format, SourceFormat};
pub use error::{DecodeError, Result};
pub use grading::{grade, grade_selection, Outcome};
pub use parser::{build_deck, parse, parse_with};
pub use session::{Session, UploadOutcome, UploadTicket};
pub use types::{AnswerOption, Card, Deck, Letter, LoadSettings, RawRow};
pub use view::{CardView, OptionView, PrimaryAction, SessionView};
