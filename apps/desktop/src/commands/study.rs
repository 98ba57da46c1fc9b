//! Study session commands. Each returns the fresh view for re-rendering.

use super::CommandError;
use crate::state::AppState;
use flaszkards_core::{Session, SessionView};

fn apply<F>(state: &AppState, command: F) -> Result<SessionView, CommandError>
where
    F: FnOnce(&mut Session),
{
    let mut session = state.lock_session()?;
    command(&mut *session);
    Ok(session.view())
}

/// Current snapshot without changing anything.
pub fn get_session_view(state: &AppState) -> Result<SessionView, CommandError> {
    Ok(state.lock_session()?.view())
}

pub fn next_card(state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        session.next();
    })
}

pub fn previous_card(state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        session.previous();
    })
}

/// Check or uncheck the option labelled `letter`.
pub fn toggle_option(letter: char, state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        session.toggle_selection(letter);
    })
}

pub fn submit_answer(state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        if let Some(outcome) = session.submit() {
            tracing::debug!(?outcome, score = session.score(), "answer submitted");
        }
    })
}

/// Show or hide the correct answer after submission.
pub fn toggle_answer(state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        session.toggle_reveal();
    })
}

/// The combined Submit / Show Answer / Hide Answer button.
pub fn press_primary(state: &AppState) -> Result<SessionView, CommandError> {
    apply(state, |session| {
        session.press_primary();
    })
}
