//! Client façade: validation → transport → parsing.

use std::time::Duration;

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http_client::{ApiRequester, DEFAULT_TIMEOUT, RequestParams};
use crate::types::{OutputFormat, Response};
use crate::validate;

/// Production endpoint of the Website Contacts API.
pub const DEFAULT_API_URL: &str = "https://website-contacts.whoisxmlapi.com/api/v1";

/// Website Contacts API client.
///
/// Holds the validated API key, the transport configuration and the most
/// recently parsed lookup ([`last_result`](Self::last_result)). Not
/// designed for shared concurrent use: [`get`](Self::get) takes
/// `&mut self`, so concurrent callers need separate instances.
#[derive(Debug)]
pub struct Client {
    api_key: String,
    requester: ApiRequester,
    last_result: Option<Response>,
}

impl Client {
    /// Create a client for the production endpoint with the default
    /// 30 second read timeout.
    ///
    /// Fails with [`ApiError::Parameter`] when the key is malformed.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client against a non-default endpoint.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            api_key: validate::validate_api_key(api_key)?,
            requester: ApiRequester::new(base_url, DEFAULT_TIMEOUT)?,
            last_result: None,
        })
    }

    /// The configured API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the API key, re-running format validation.
    pub fn set_api_key(&mut self, api_key: &str) -> Result<()> {
        self.api_key = validate::validate_api_key(api_key)?;
        Ok(())
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    /// Replace the endpoint URL (HTTP scheme required).
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.requester.set_base_url(base_url)
    }

    /// The configured read timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.requester.timeout()
    }

    /// Replace the read timeout, bounded to [1, 60] seconds inclusive.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.requester.set_timeout(timeout)
    }

    /// The most recently parsed lookup, if any.
    ///
    /// Overwritten by every successful [`get`](Self::get); a single slot,
    /// not keyed by domain. [`get_raw`](Self::get_raw) never touches it.
    #[must_use]
    pub fn last_result(&self) -> Option<&Response> {
        self.last_result.as_ref()
    }

    /// Look up a domain and parse the result.
    ///
    /// Forces the JSON output format, requires the top-level `domainName`
    /// marker, and stores the parsed [`Response`] as the last result.
    /// Set `hard_refresh` to make the service recompute instead of
    /// serving its server-side cache.
    pub async fn get(&mut self, domain: &str, hard_refresh: bool) -> Result<Response> {
        let body = self
            .get_raw(domain, hard_refresh, OutputFormat::Json)
            .await?;
        let response = parse_response(&body)?;
        self.last_result = Some(response.clone());
        Ok(response)
    }

    /// Look up a domain and return the raw response body.
    ///
    /// With [`OutputFormat::Xml`] the body is an XML document returned
    /// verbatim. Errors from the transport propagate unchanged.
    pub async fn get_raw(
        &self,
        domain: &str,
        hard_refresh: bool,
        output_format: OutputFormat,
    ) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(ApiError::EmptyApiKey);
        }
        let domain_name = validate::validate_domain_name(domain)?;

        let params = RequestParams {
            api_key: self.api_key.clone(),
            domain_name,
            hard_refresh,
            output_format,
        };
        self.requester.get(&params).await
    }
}

/// Parse a JSON lookup body into a [`Response`].
///
/// The only well-formedness requirement is the `domainName` root marker;
/// everything below it defaults field by field.
fn parse_response(body: &str) -> Result<Response> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        log::error!("response JSON parse failed: {e}");
        ApiError::UnparsableResponse {
            detail: "could not parse API response".to_string(),
            cause: Some(e.to_string()),
        }
    })?;

    if parsed.get("domainName").is_none() {
        return Err(ApiError::UnparsableResponse {
            detail: "could not find the expected root element".to_string(),
            cause: None,
        });
    }

    Ok(Response::from_json(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_KEY: &str = "at_abcdefgh0123456789abcdefgh012";

    fn client() -> Client {
        Client::new(API_KEY).unwrap()
    }

    // ---- construction ----

    #[test]
    fn new_uses_production_endpoint() {
        let c = client();
        assert_eq!(c.base_url(), DEFAULT_API_URL);
        assert_eq!(c.timeout(), Duration::from_secs(30));
        assert!(c.last_result().is_none());
    }

    #[test]
    fn new_rejects_malformed_key() {
        let err = Client::new("not-a-key").unwrap_err();
        assert!(matches!(err, ApiError::Parameter { param, .. } if param == "api_key"));
    }

    #[test]
    fn with_base_url_rejects_bad_endpoint() {
        let err = Client::with_base_url(API_KEY, "short").unwrap_err();
        assert!(matches!(err, ApiError::Parameter { param, .. } if param == "base_url"));
    }

    // ---- setters ----

    #[test]
    fn set_api_key_revalidates() {
        let mut c = client();
        assert!(c.set_api_key("bad").is_err());
        assert_eq!(c.api_key(), API_KEY);

        let other = "AT_ZYXWVUTS9876543210ZYXWVUTS987";
        c.set_api_key(other).unwrap();
        assert_eq!(c.api_key(), other);
    }

    #[test]
    fn set_timeout_bounds() {
        let mut c = client();
        assert!(c.set_timeout(Duration::from_secs(1)).is_ok());
        assert!(c.set_timeout(Duration::from_secs(60)).is_ok());
        assert!(c.set_timeout(Duration::from_secs(0)).is_err());
        assert!(c.set_timeout(Duration::from_secs(61)).is_err());
        assert_eq!(c.timeout(), Duration::from_secs(60));
    }

    // ---- pre-network failures ----

    #[tokio::test]
    async fn get_raw_rejects_invalid_domain_before_network() {
        let c = client();
        let err = c
            .get_raw("345.#ab.%org", false, OutputFormat::Json)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parameter { param, .. } if param == "domain"));
    }

    #[tokio::test]
    async fn get_raw_requires_api_key() {
        let c = Client {
            api_key: String::new(),
            requester: ApiRequester::new("https://api.example.com", DEFAULT_TIMEOUT).unwrap(),
            last_result: None,
        };
        let err = c
            .get_raw("youtube.com", false, OutputFormat::Json)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyApiKey));
    }

    // ---- parse_response ----

    #[test]
    fn parse_response_requires_valid_json() {
        let err = parse_response("<?xml version=\"1.0\"?>").unwrap_err();
        assert!(matches!(
            err,
            ApiError::UnparsableResponse { cause: Some(_), .. }
        ));
    }

    #[test]
    fn parse_response_requires_root_marker() {
        let err = parse_response(r#"{"countryCode":"US"}"#).unwrap_err();
        assert!(matches!(
            err,
            ApiError::UnparsableResponse { cause: None, .. }
        ));
    }

    #[test]
    fn parse_response_accepts_marked_body() {
        let response = parse_response(r#"{"domainName":"youtube.com"}"#).unwrap();
        assert_eq!(response.domain_name, "youtube.com");
        assert!(response.emails.is_empty());
    }
}
