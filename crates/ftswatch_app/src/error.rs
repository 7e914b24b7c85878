use thiserror::Error;

use ftswatch_engine::{LaunchError, StatusError};

/// Top-level failures. `main` logs each and maps it to a non-zero exit;
/// nothing below this level terminates the process on its own.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid base url '{value}': {source}")]
    Config {
        value: String,
        source: url::ParseError,
    },

    /// The launch succeeded but reported no status address, so there is
    /// nothing to poll. Escalated here by explicit decision instead of
    /// polling an empty address.
    #[error("start response carried no status location; nothing to poll")]
    StatusUnavailable,

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
