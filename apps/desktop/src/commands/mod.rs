//! Commands the presentation layer dispatches to, one per user action.

pub mod deck;
pub mod study;

pub use deck::{get_deck, import_bytes, import_file, ImportResult};
pub use study::{
    get_session_view, next_card, press_primary, previous_card, submit_answer, toggle_answer,
    toggle_option,
};

/// Error surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<flaszkards_core::DecodeError> for CommandError {
    fn from(e: flaszkards_core::DecodeError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<crate::config::ConfigError> for CommandError {
    fn from(e: crate::config::ConfigError) -> Self {
        Self { message: e.to_string() }
    }
}
