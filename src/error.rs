use serde::Serialize;
use thiserror::Error;

use crate::types::ErrorMessage;

/// Unified error type for all Website Contacts API operations.
///
/// Each variant maps to one failure class of the request pipeline:
/// local validation, HTTP dispatch, or response interpretation.
/// All variants are serializable for structured error reporting.
///
/// # Transport errors
///
/// [`Timeout`](Self::Timeout) and [`Network`](Self::Network) are raised by
/// the HTTP layer before any status code is available and never carry a
/// server message. Everything else originates from the service itself or
/// from local validation.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum ApiError {
    /// A request parameter failed local validation (API key, domain name
    /// or output format). Detected before any network call.
    #[error("invalid parameter '{param}': {detail}")]
    Parameter {
        /// Name of the offending parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The client has no API key set. Detected before any network call.
    #[error("API key is not set")]
    EmptyApiKey,

    /// The server rejected the credentials or the account is out of
    /// credits (HTTP 401, 402 or 403).
    #[error("authentication rejected (HTTP {status}): {raw_message}")]
    ApiAuth {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body text.
        raw_message: String,
        /// Structured `{code, messages}` body, when it parsed as one.
        parsed: Option<ErrorMessage>,
    },

    /// The server considered the request malformed (HTTP 400 or 422).
    #[error("bad request (HTTP {status}): {raw_message}")]
    BadRequest {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body text.
        raw_message: String,
        /// Structured `{code, messages}` body, when it parsed as one.
        parsed: Option<ErrorMessage>,
    },

    /// Any other unsuccessful HTTP status.
    #[error("unexpected HTTP status {status}: {raw_message}")]
    HttpApi {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body text.
        raw_message: String,
    },

    /// The response body was not valid JSON, or lacked the expected root
    /// element.
    #[error("unparsable API response: {detail}")]
    UnparsableResponse {
        /// Description of the parse failure.
        detail: String,
        /// Underlying parser error, when one exists.
        cause: Option<String>,
    },

    /// The HTTP request timed out.
    #[error("request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, etc.).
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// HTTP status code carried by this error, if it reached the server.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiAuth { status, .. }
            | Self::BadRequest { status, .. }
            | Self::HttpApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured server error message, when the error body parsed as one.
    #[must_use]
    pub fn parsed_message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::ApiAuth { parsed, .. } | Self::BadRequest { parsed, .. } => parsed.as_ref(),
            _ => None,
        }
    }

    /// Whether this is a transport-level failure that never reached the
    /// service (connection error or timeout).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network { .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Display ----

    #[test]
    fn display_parameter() {
        let e = ApiError::Parameter {
            param: "domain".to_string(),
            detail: "invalid domain name".to_string(),
        };
        assert_eq!(e.to_string(), "invalid parameter 'domain': invalid domain name");
    }

    #[test]
    fn display_empty_api_key() {
        assert_eq!(ApiError::EmptyApiKey.to_string(), "API key is not set");
    }

    #[test]
    fn display_api_auth() {
        let e = ApiError::ApiAuth {
            status: 403,
            raw_message: "access restricted".to_string(),
            parsed: None,
        };
        assert_eq!(
            e.to_string(),
            "authentication rejected (HTTP 403): access restricted"
        );
    }

    #[test]
    fn display_bad_request() {
        let e = ApiError::BadRequest {
            status: 422,
            raw_message: "unprocessable".to_string(),
            parsed: None,
        };
        assert_eq!(e.to_string(), "bad request (HTTP 422): unprocessable");
    }

    #[test]
    fn display_http_api() {
        let e = ApiError::HttpApi {
            status: 503,
            raw_message: "service unavailable".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unexpected HTTP status 503: service unavailable"
        );
    }

    #[test]
    fn display_unparsable_response() {
        let e = ApiError::UnparsableResponse {
            detail: "could not parse API response".to_string(),
            cause: Some("expected value at line 1".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "unparsable API response: could not parse API response"
        );
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "request timeout: 30s elapsed");
    }

    #[test]
    fn display_network() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "network error: connection refused");
    }

    // ---- status() ----

    #[test]
    fn status_present_on_server_errors() {
        let e = ApiError::ApiAuth {
            status: 401,
            raw_message: String::new(),
            parsed: None,
        };
        assert_eq!(e.status(), Some(401));

        let e = ApiError::BadRequest {
            status: 400,
            raw_message: String::new(),
            parsed: None,
        };
        assert_eq!(e.status(), Some(400));

        let e = ApiError::HttpApi {
            status: 500,
            raw_message: String::new(),
        };
        assert_eq!(e.status(), Some(500));
    }

    #[test]
    fn status_absent_on_local_and_transport_errors() {
        assert_eq!(ApiError::EmptyApiKey.status(), None);
        let e = ApiError::Network {
            detail: "unreachable".to_string(),
        };
        assert_eq!(e.status(), None);
    }

    // ---- parsed_message() ----

    #[test]
    fn parsed_message_present_when_body_parsed() {
        let e = ApiError::ApiAuth {
            status: 403,
            raw_message: r#"{"code":403,"messages":"denied"}"#.to_string(),
            parsed: Some(ErrorMessage {
                code: 403,
                message: "denied".to_string(),
            }),
        };
        let parsed = e.parsed_message();
        assert!(matches!(parsed, Some(m) if m.code == 403 && m.message == "denied"));
    }

    #[test]
    fn parsed_message_absent_elsewhere() {
        let e = ApiError::HttpApi {
            status: 500,
            raw_message: "oops".to_string(),
        };
        assert!(e.parsed_message().is_none());
    }

    // ---- is_transport() ----

    #[test]
    fn transport_errors_classified() {
        let timeout = ApiError::Timeout {
            detail: "x".to_string(),
        };
        let network = ApiError::Network {
            detail: "x".to_string(),
        };
        assert!(timeout.is_transport());
        assert!(network.is_transport());
    }

    #[test]
    fn service_errors_not_transport() {
        let e = ApiError::ApiAuth {
            status: 403,
            raw_message: String::new(),
            parsed: None,
        };
        assert!(!e.is_transport());
        assert!(!ApiError::EmptyApiKey.is_transport());
    }

    // ---- serialization ----

    #[test]
    fn serialize_tagged_by_kind() {
        let e = ApiError::HttpApi {
            status: 503,
            raw_message: "unavailable".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"kind\":\"HttpApi\""));
        assert!(json.contains("\"status\":503"));
    }

    #[test]
    fn serialize_embeds_parsed_message() {
        let e = ApiError::BadRequest {
            status: 422,
            raw_message: String::new(),
            parsed: Some(ErrorMessage {
                code: 422,
                message: "missing domainName".to_string(),
            }),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":422"));
        assert!(json.contains("missing domainName"));
    }
}
