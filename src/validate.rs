//! Pure request-parameter validators.
//!
//! Every validator either returns a normalized value or
//! [`ApiError::Parameter`]; none of them panic or touch the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ApiError, Result};
use crate::types::OutputFormat;

static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^at_[a-z0-9]{29}$").unwrap());

// One or more dot-separated labels (alphanumeric/underscore/hyphen, 1-63
// chars, no leading/trailing hyphen) followed by a top-level label ending
// in a letter or digit.
static DOMAIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[0-9a-z_](?:[0-9a-z_-]{0,61}[0-9a-z_])?\.)+[0-9a-z][0-9a-z-]{0,61}[a-z0-9]$")
        .unwrap()
});

/// Validate an API key (`at_` followed by 29 alphanumerics, any case).
pub fn validate_api_key(api_key: &str) -> Result<String> {
    if API_KEY_RE.is_match(api_key) {
        Ok(api_key.to_string())
    } else {
        Err(ApiError::Parameter {
            param: "api_key".to_string(),
            detail: "invalid API key format".to_string(),
        })
    }
}

/// Validate a domain name against the lookup service's grammar.
pub fn validate_domain_name(domain: &str) -> Result<String> {
    if DOMAIN_NAME_RE.is_match(domain) {
        Ok(domain.to_string())
    } else {
        Err(ApiError::Parameter {
            param: "domain".to_string(),
            detail: format!("invalid domain name '{domain}'"),
        })
    }
}

/// Parse a response format name, case-insensitively, into [`OutputFormat`].
pub fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "xml" => Ok(OutputFormat::Xml),
        _ => Err(ApiError::Parameter {
            param: "output_format".to_string(),
            detail: format!("response format must be json or xml, got '{value}'"),
        }),
    }
}
