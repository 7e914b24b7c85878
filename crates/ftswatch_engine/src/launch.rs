use log::{info, warn};
use reqwest::header::CONTENT_LOCATION;
use url::Url;

use ftswatch_core::JobHandle;

use crate::LaunchError;

/// Starts a transfer process for `project` and returns the
/// status-polling address the service reports via `Content-Location`.
///
/// A 2xx response without the header is a degraded success: the process
/// may well be running, there is just nowhere to poll. The handle comes
/// back unavailable and the caller decides whether that is acceptable.
pub async fn start_process(
    http: &reqwest::Client,
    base: &Url,
    project: &str,
) -> Result<JobHandle, LaunchError> {
    let endpoint = start_endpoint(base, project)?;
    info!("starting process for project '{project}' at {endpoint}");

    let response = http.post(endpoint).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LaunchError::Http(status.as_u16()));
    }

    let location = response
        .headers()
        .get(CONTENT_LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if location.is_empty() {
        warn!("start response carried no Content-Location header");
        return Ok(JobHandle::unavailable());
    }
    Ok(JobHandle::new(location))
}

fn start_endpoint(base: &Url, project: &str) -> Result<Url, LaunchError> {
    let mut endpoint = base.clone();
    endpoint
        .path_segments_mut()
        .map_err(|_| LaunchError::Endpoint(format!("base url '{base}' cannot carry a path")))?
        .pop_if_empty()
        .extend(["api", "v2", "process", project, "start"]);
    Ok(endpoint)
}
