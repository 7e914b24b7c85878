use thiserror::Error;

/// Failure starting a transfer process. Fatal: without a started process
/// there is nothing to monitor.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot build start endpoint: {0}")]
    Endpoint(String),

    #[error("start request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("start request rejected with http status {0}")]
    Http(u16),
}

/// Malformed status payload.
///
/// Distinct from an absent optional timestamp, which decodes cleanly to
/// `None` and is not an error.
#[derive(Debug, Error)]
#[error("malformed status payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Failure of one status poll.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("status fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status endpoint returned http status {0}")]
    Http(u16),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
