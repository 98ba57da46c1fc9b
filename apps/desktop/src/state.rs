//! Application state.

use crate::commands::CommandError;
use crate::config::AppConfig;
use flaszkards_core::Session;
use std::sync::{Arc, Mutex, MutexGuard};

/// Global application state: the one study session plus its configuration.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            config,
        }
    }

    pub(crate) fn lock_session(&self) -> Result<MutexGuard<'_, Session>, CommandError> {
        self.session
            .lock()
            .map_err(|_| CommandError::new("session lock poisoned"))
    }
}
