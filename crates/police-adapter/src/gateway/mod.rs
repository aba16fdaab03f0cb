//! Outbound adapters - HTTP clients for the remote services
//!
//! Both clients share one construction rule: a reqwest client with a hard
//! per-request timeout and no retries.

pub mod http_mailer;
pub mod http_registry;

use std::time::Duration;

use police_domain::{FailureKind, RemoteFailure};
use thiserror::Error;

pub use http_mailer::HttpMailNotifier;
pub use http_registry::HttpVehicleRegistry;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
}

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Parse a base URL so that endpoint paths resolve below it.
///
/// The path always ends in `/`: `http://gw/registry` becomes
/// `http://gw/registry/`, which keeps the prefix when joining.
pub(crate) fn parse_base_url(raw: &str) -> Result<reqwest::Url, GatewayError> {
    let base_error = |reason: String| GatewayError::BaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = reqwest::Url::parse(raw.trim()).map_err(|e| base_error(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(base_error("URL cannot carry a path".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolve an endpoint path below the base URL, leading `/` or not
pub(crate) fn endpoint(base: &reqwest::Url, path: &str) -> Result<reqwest::Url, RemoteFailure> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| RemoteFailure::new(FailureKind::Transport, e.to_string()))
}

/// Map a reqwest error that happened before a status was available
pub(crate) fn transport_failure(err: &reqwest::Error) -> RemoteFailure {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Transport
    };
    RemoteFailure::new(kind, err.to_string())
}

/// Describe a non-2xx answer, keeping the status code
pub(crate) async fn status_failure(response: reqwest::Response) -> RemoteFailure {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();

    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("unexpected status").to_string()
    } else {
        body.chars().take(200).collect()
    };
    RemoteFailure::new(FailureKind::Status(status.as_u16()), message)
}
