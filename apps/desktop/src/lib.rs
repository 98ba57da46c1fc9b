//! Desktop host for the flashcard quiz.
//!
//! Owns the single [`Session`](flaszkards_core::Session) and exposes one
//! command per user action. A UI binds its controls to these commands and
//! renders the returned [`SessionView`](flaszkards_core::SessionView).

pub mod commands;
pub mod config;
pub mod state;

pub use commands::CommandError;
pub use config::{AppConfig, ConfigError};
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Later calls are ignored.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Load configuration, start logging and build the application state.
pub fn bootstrap() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    tracing::info!(
        skip_header_row = config.skip_header_row,
        max_upload_bytes = config.max_upload_bytes,
        "starting flashcard session"
    );

    Ok(AppState::new(config))
}
