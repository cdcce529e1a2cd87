//! # website-contacts
//!
//! Client library for the Website Contacts API: given a domain name,
//! retrieve structured contact information for the website behind it —
//! emails, phone numbers, social links, postal addresses and company
//! names.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`rustls`** *(default)* — Pure-Rust TLS. Recommended for
//!   cross-compilation and musl targets.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use website_contacts::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = Client::new("at_your29charapikey0000000000000")?;
//!
//!     let contacts = client.get("youtube.com", false).await?;
//!     println!("{} ({})", contacts.domain_name, contacts.country_code);
//!     for email in &contacts.emails {
//!         println!("  {} <{}>", email.description, email.email);
//!     }
//!
//!     // The last parsed lookup stays available on the client.
//!     assert!(client.last_result().is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Raw and XML Responses
//!
//! ```rust,no_run
//! # use website_contacts::{Client, OutputFormat};
//! # async fn example(client: &Client) -> website_contacts::Result<()> {
//! // Verbatim body, not parsed and not cached on the client.
//! let xml = client.get_raw("youtube.com", false, OutputFormat::Xml).await?;
//! assert!(xml.starts_with("<?xml"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::Parameter`] / [`ApiError::EmptyApiKey`] — rejected
//!   locally, before any network traffic
//! - [`ApiError::ApiAuth`] — HTTP 401/402/403, with the structured
//!   server message when the body parses as one
//! - [`ApiError::BadRequest`] — HTTP 400/422
//! - [`ApiError::HttpApi`] — any other unsuccessful status
//! - [`ApiError::UnparsableResponse`] — body was not the expected JSON
//! - [`ApiError::Timeout`] / [`ApiError::Network`] — transport failures
//!
//! Nothing is retried internally; every error is recoverable by the
//! caller.

mod client;
mod error;
mod http_client;
mod types;
mod utils;
mod validate;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client façade and transport
pub use client::{Client, DEFAULT_API_URL};
pub use http_client::{ApiRequester, RequestParams};

// Re-export model types
pub use types::{Email, ErrorMessage, OutputFormat, Phone, Response};

// Re-export validators for callers holding unchecked input
pub use validate::{parse_output_format, validate_api_key, validate_domain_name};
