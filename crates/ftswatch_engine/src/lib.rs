//! ftswatch engine: process launch, status polling, and payload decoding.
mod client;
mod error;
mod launch;
mod status;

pub use client::{fetch_status, fetch_status_with_retry, MonitorClient, PollSettings};
pub use error::{DecodeError, LaunchError, StatusError};
pub use launch::start_process;
pub use status::decode_status;
