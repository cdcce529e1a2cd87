use serde::Serialize;
use serde_json::{Map, Value};

// ============ Output Format ============

/// Response serialization requested from the server.
///
/// Serialized as lowercase strings (`"json"`, `"xml"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured JSON, the only format the client can parse.
    #[default]
    Json,
    /// XML document, returned verbatim.
    Xml,
}

impl OutputFormat {
    /// Canonical lower-case wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============ Decode Helpers ============
//
// The API payload is semi-structured: any key may be absent, null or carry
// the wrong type. Each helper decodes one semantic shape and falls back to
// the zero value instead of failing.

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn string_value(values: &Map<String, Value>, key: &str) -> String {
    values.get(key).map(scalar_to_string).unwrap_or_default()
}

fn int_value(values: &Map<String, Value>, key: &str) -> i64 {
    match values.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn bool_value(values: &Map<String, Value>, key: &str) -> bool {
    match values.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    }
}

fn string_list(values: &Map<String, Value>, key: &str) -> Vec<String> {
    match values.get(key) {
        Some(Value::Array(items)) => items.iter().map(scalar_to_string).collect(),
        _ => Vec::new(),
    }
}

fn object_list<T>(values: &Map<String, Value>, key: &str, build: fn(&Value) -> T) -> Vec<T> {
    match values.get(key) {
        Some(Value::Array(items)) => items.iter().map(build).collect(),
        _ => Vec::new(),
    }
}

fn nested_object<'a>(values: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    values.get(key).and_then(Value::as_object)
}

// ============ Contact Records ============

/// A contact email address found on the website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Email {
    /// Free-text label (e.g. `"Support"`), empty when the source had none.
    pub description: String,
    /// The email address itself.
    pub email: String,
}

impl Email {
    /// Build from one element of the `emails` array. Anything that is not
    /// a JSON object decodes to the all-empty record.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(values) = value.as_object() else {
            return Self::default();
        };
        Self {
            description: string_value(values, "description"),
            email: string_value(values, "email"),
        }
    }
}

/// A contact phone number found on the website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phone {
    /// Calling hours as published by the website (e.g. `"10:00-19:00"`).
    pub call_hours: String,
    /// Free-text label, empty when the source had none.
    pub description: String,
    /// The phone number itself.
    pub phone_number: String,
}

impl Phone {
    /// Build from one element of the `phones` array. Anything that is not
    /// a JSON object decodes to the all-empty record.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(values) = value.as_object() else {
            return Self::default();
        };
        Self {
            call_hours: string_value(values, "callHours"),
            description: string_value(values, "description"),
            phone_number: string_value(values, "phoneNumber"),
        }
    }
}

// ============ Error Body ============

/// Structured error body returned by the service: `{code, messages}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    /// Service error code, 0 when absent.
    pub code: i64,
    /// Human-readable message (wire key `messages`), empty when absent.
    pub message: String,
}

impl ErrorMessage {
    /// Build from a parsed JSON object.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(values) = value.as_object() else {
            return Self::default();
        };
        Self {
            code: int_value(values, "code"),
            message: string_value(values, "messages"),
        }
    }

    /// Best-effort parse of a raw error body.
    ///
    /// Returns `None` when the body is not a JSON object; the caller keeps
    /// the raw text either way.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        if value.is_object() {
            Some(Self::from_json(&value))
        } else {
            None
        }
    }
}

// ============ Lookup Response ============

/// Parsed contact information for one domain.
///
/// Every field defaults to its zero value (empty string, empty list,
/// `false`) when the corresponding key is absent, null or of the wrong
/// type — list fields in particular are never absent. Instances are
/// immutable snapshots of one API response; equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Company names found on the website, in source order.
    pub company_names: Vec<String>,
    /// ISO country code of the website's contact information.
    pub country_code: String,
    /// The domain that was looked up.
    pub domain_name: String,
    /// Contact email addresses, in source order.
    pub emails: Vec<Email>,
    /// The site's `meta description` content.
    pub meta_description: String,
    /// The site's `meta title` content.
    pub meta_title: String,
    /// Contact phone numbers, in source order.
    pub phones: Vec<Phone>,
    /// Postal addresses found on the website, in source order.
    pub postal_addresses: Vec<String>,
    /// Facebook profile link.
    pub social_facebook: String,
    /// Instagram profile link.
    pub social_instagram: String,
    /// LinkedIn profile link (wire key `linkedIn`).
    pub social_linkedin: String,
    /// Twitter profile link.
    pub social_twitter: String,
    /// Whether the website answered when the service crawled it.
    pub website_responded: bool,
}

impl Response {
    /// Build from the top-level JSON object of a successful lookup.
    ///
    /// The nested `meta` and `socialLinks` objects follow the same
    /// defaulting rules as every other key: when missing or malformed
    /// their fields come back empty.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(values) = value.as_object() else {
            return Self::default();
        };

        let meta = nested_object(values, "meta");
        let social = nested_object(values, "socialLinks");

        Self {
            company_names: string_list(values, "companyNames"),
            country_code: string_value(values, "countryCode"),
            domain_name: string_value(values, "domainName"),
            emails: object_list(values, "emails", Email::from_json),
            meta_description: meta.map(|m| string_value(m, "description")).unwrap_or_default(),
            meta_title: meta.map(|m| string_value(m, "title")).unwrap_or_default(),
            phones: object_list(values, "phones", Phone::from_json),
            postal_addresses: string_list(values, "postalAddresses"),
            social_facebook: social.map(|s| string_value(s, "facebook")).unwrap_or_default(),
            social_instagram: social.map(|s| string_value(s, "instagram")).unwrap_or_default(),
            social_linkedin: social.map(|s| string_value(s, "linkedIn")).unwrap_or_default(),
            social_twitter: social.map(|s| string_value(s, "twitter")).unwrap_or_default(),
            website_responded: bool_value(values, "websiteResponded"),
        }
    }
}
