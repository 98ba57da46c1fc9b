//! Common test utilities for host integration tests.

pub mod fixtures;

use flaszkards_desktop_lib::{AppConfig, AppState};

/// Fresh application state with default configuration.
pub fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

/// Fresh application state with a custom configuration.
#[allow(dead_code)]
pub fn test_state_with(config: AppConfig) -> AppState {
    AppState::new(config)
}
