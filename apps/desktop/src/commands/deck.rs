//! Deck upload commands.

use super::CommandError;
use crate::state::AppState;
use flaszkards_core::{parser, Deck, UploadOutcome};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ImportResult {
    #[serde(flatten)]
    pub outcome: UploadOutcome,
    pub source: String,
}

/// Decode an upload and install it as the new deck.
///
/// Decoding runs off the session lock. If another upload starts before this
/// one finishes, this result is discarded and reported as stale.
pub async fn import_bytes(
    bytes: Vec<u8>,
    source: String,
    state: &AppState,
) -> Result<ImportResult, CommandError> {
    let ticket = state.lock_session()?.begin_upload();
    let settings = state.config.load_settings();

    let decoded = tokio::task::spawn_blocking(move || parser::parse_with(&bytes, &settings))
        .await
        .map_err(|e| CommandError::new(format!("decode task failed: {e}")))?;

    if let Err(e) = &decoded {
        tracing::warn!(source = %source, error = %e, "upload could not be decoded");
    }

    let outcome = state.lock_session()?.commit_upload(ticket, decoded)?;
    match outcome {
        UploadOutcome::Installed { cards } => {
            tracing::info!(source = %source, cards, "deck loaded");
        }
        UploadOutcome::Stale => {
            tracing::debug!(source = %source, "superseded upload discarded");
        }
    }

    Ok(ImportResult { outcome, source })
}

/// Read a CSV or spreadsheet file from disk and install it as the new deck.
pub async fn import_file(file_path: String, state: &AppState) -> Result<ImportResult, CommandError> {
    let path = Path::new(&file_path);
    let bytes = tokio::fs::read(path).await?;

    let source = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("upload")
        .to_string();

    import_bytes(bytes, source, state).await
}

/// The deck currently being studied.
pub fn get_deck(state: &AppState) -> Result<Deck, CommandError> {
    Ok(state.lock_session()?.deck().clone())
}
