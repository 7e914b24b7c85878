use std::io;
use std::time::Duration;

use log::warn;
use url::Url;

use ftswatch_core::{JobHandle, ProcessStatus};

use crate::status::decode_status;
use crate::{launch, LaunchError, StatusError};

/// Fetch timeouts and the bounded retry policy around one status poll.
///
/// The default keeps the legacy fail-fast behavior: a single attempt
/// per poll, so the first bad poll ends the monitor. Retry hardening is
/// a configuration choice, not a semantic change.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Total attempts per poll, including the first. Minimum 1.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub retry_backoff: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_attempts: 1,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

/// Fetches and decodes one status snapshot from the polling address.
pub async fn fetch_status(
    http: &reqwest::Client,
    handle: &JobHandle,
) -> Result<ProcessStatus, StatusError> {
    let response = http.get(handle.as_str()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(StatusError::Http(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(decode_status(&body)?)
}

/// Polls the status address, retrying transport and http failures up to
/// the configured attempt budget.
///
/// Malformed payloads are never retried; the service will not start
/// speaking a different dialect between attempts.
pub async fn fetch_status_with_retry(
    http: &reqwest::Client,
    handle: &JobHandle,
    settings: &PollSettings,
) -> Result<ProcessStatus, StatusError> {
    let attempts = settings.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match fetch_status(http, handle).await {
            Ok(status) => return Ok(status),
            Err(err @ StatusError::Decode(_)) => return Err(err),
            Err(err) if attempt < attempts => {
                warn!("status poll attempt {attempt}/{attempts} failed, retrying: {err}");
                tokio::time::sleep(settings.retry_backoff).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Blocking facade over the async HTTP side.
///
/// The poll loop runs one request at a time on its own thread, so the
/// client owns a current-thread runtime and drives each call to
/// completion before the loop continues.
pub struct MonitorClient {
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    settings: PollSettings,
}

impl MonitorClient {
    pub fn new(settings: PollSettings) -> io::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(io::Error::other)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            http,
            runtime,
            settings,
        })
    }

    pub fn start_process(&self, base: &Url, project: &str) -> Result<JobHandle, LaunchError> {
        self.runtime
            .block_on(launch::start_process(&self.http, base, project))
    }

    pub fn fetch_status(&self, handle: &JobHandle) -> Result<ProcessStatus, StatusError> {
        self.runtime
            .block_on(fetch_status_with_retry(&self.http, handle, &self.settings))
    }
}
