//! Logging helpers.

/// Longest body excerpt included in debug logs.
const MAX_LOGGED_BODY: usize = 512;

/// Shorten a response body for logging, keeping UTF-8 boundaries intact.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY {
        return body.to_string();
    }
    let cut = (0..=MAX_LOGGED_BODY)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... (+{} bytes)", &body[..cut], body.len() - cut)
}
