//! HTTP transport for the Website Contacts API.
//!
//! One lookup maps to exactly one GET request; there is no retry or
//! backoff. Status codes are mapped to [`ApiError`] kinds here, so the
//! mapping is testable without a socket.

use std::time::Duration;

use reqwest::{Client, header};

use crate::error::{ApiError, Result};
use crate::types::{ErrorMessage, OutputFormat};
use crate::utils::truncate_body;

/// Fixed connect timeout, separate from the configurable read timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default read timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Inclusive read-timeout bounds.
const MIN_TIMEOUT: Duration = Duration::from_secs(1);
const MAX_TIMEOUT: Duration = Duration::from_secs(60);

/// Identification header sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Query payload for one lookup request.
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Validated API key.
    pub api_key: String,
    /// Validated domain name to look up.
    pub domain_name: String,
    /// Ask the service to recompute instead of serving its cached data.
    pub hard_refresh: bool,
    /// Requested response serialization.
    pub output_format: OutputFormat,
}

impl RequestParams {
    /// Wire-form query pairs. Keys with empty values are omitted;
    /// `hardRefresh` is always sent as `0`/`1`.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.api_key.is_empty() {
            pairs.push(("apiKey", self.api_key.clone()));
        }
        if !self.domain_name.is_empty() {
            pairs.push(("domainName", self.domain_name.clone()));
        }
        pairs.push((
            "hardRefresh",
            if self.hard_refresh { "1" } else { "0" }.to_string(),
        ));
        pairs.push(("outputFormat", self.output_format.as_str().to_string()));
        pairs
    }
}

/// Performs GET requests against the configured endpoint and maps
/// response statuses to the error taxonomy.
#[derive(Debug)]
pub struct ApiRequester {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiRequester {
    /// Create a requester. Fails with [`ApiError::Parameter`] when the
    /// URL lacks an HTTP scheme or the timeout is outside [1, 60] s.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(),
            base_url: validated_base_url(base_url)?,
            timeout: validated_timeout(timeout)?,
        })
    }

    /// Configured endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the endpoint URL, re-running the same validation as the
    /// constructor. State is unchanged on error.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = validated_base_url(base_url)?;
        Ok(())
    }

    /// Configured read timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace the read timeout, bounded to [1, 60] seconds inclusive.
    /// State is unchanged on error.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.timeout = validated_timeout(timeout)?;
        Ok(())
    }

    /// Perform one GET round trip and return the response body.
    ///
    /// Transport failures surface as [`ApiError::Timeout`] or
    /// [`ApiError::Network`]; unsuccessful statuses map through
    /// [`check_status`].
    pub async fn get(&self, params: &RequestParams) -> Result<String> {
        log::debug!("GET {} domain={}", self.base_url, params.domain_name);

        let response = self
            .client
            .get(&self.base_url)
            .query(&params.query_pairs())
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::CONNECTION, "close")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ApiError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("response status: {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;
        log::debug!("response body: {}", truncate_body(&body));

        check_status(status, body)
    }
}

/// Map an HTTP status and body to the error taxonomy.
///
/// 2xx passes the body through. 401/402/403 and 400/422 carry the body
/// text plus a best-effort parse of the `{code, messages}` error shape.
/// Every other status, including the undefined non-2xx band below 300,
/// is an [`ApiError::HttpApi`].
pub(crate) fn check_status(status: u16, body: String) -> Result<String> {
    match status {
        200..=299 => Ok(body),
        401 | 402 | 403 => {
            log::warn!("authentication rejected (HTTP {status})");
            Err(ApiError::ApiAuth {
                status,
                parsed: ErrorMessage::from_body(&body),
                raw_message: body,
            })
        }
        400 | 422 => {
            log::warn!("bad request (HTTP {status})");
            Err(ApiError::BadRequest {
                status,
                parsed: ErrorMessage::from_body(&body),
                raw_message: body,
            })
        }
        _ => {
            log::warn!("unexpected HTTP status {status}");
            Err(ApiError::HttpApi {
                status,
                raw_message: body,
            })
        }
    }
}

fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

fn validated_base_url(base_url: &str) -> Result<String> {
    if base_url.len() > 8 && base_url.starts_with("http") {
        Ok(base_url.to_string())
    } else {
        Err(ApiError::Parameter {
            param: "base_url".to_string(),
            detail: format!("invalid URL '{base_url}'"),
        })
    }
}

fn validated_timeout(timeout: Duration) -> Result<Duration> {
    if (MIN_TIMEOUT..=MAX_TIMEOUT).contains(&timeout) {
        Ok(timeout)
    } else {
        Err(ApiError::Parameter {
            param: "timeout".to_string(),
            detail: "timeout must be within [1, 60] seconds".to_string(),
        })
    }
}
