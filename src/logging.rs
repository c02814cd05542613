//! Request and response logging with redaction of credential headers.
//!
//! Method and URL are logged at info, headers at debug and bodies at trace.
//! `Radar-Authentication` and other credential headers never reach the log.

use crate::constants;
use tracing::{debug, info, trace};

/// Redacts sensitive values from strings
#[must_use]
pub fn redact_sensitive_value(value: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        "[REDACTED]".to_string()
    }
}

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "radar-authentication" | "authorization" | "cookie" | "set-cookie" | "x-access-token"
    )
}

fn log_headers(label: &str, headers: &reqwest::header::HeaderMap) {
    debug!(target: constants::LOG_TARGET_CLIENT, "{label} headers:");
    for (name, value) in headers {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            redact_sensitive_value(&String::from_utf8_lossy(value.as_bytes()))
        } else {
            String::from_utf8_lossy(value.as_bytes()).to_string()
        };
        debug!(
            target: constants::LOG_TARGET_CLIENT,
            "  {}: {}",
            header_str,
            display_value
        );
    }
}

/// Logs an HTTP request with optional headers and body
pub fn log_request(
    method: &str,
    url: &str,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
) {
    info!(
        target: constants::LOG_TARGET_CLIENT,
        "→ {} {}",
        method.to_uppercase(),
        url
    );

    if let Some(header_map) = headers {
        log_headers("Request", header_map);
    }

    if let Some(body_content) = body {
        trace!(
            target: constants::LOG_TARGET_CLIENT,
            "Request body: {}",
            body_content
        );
    }
}

/// Logs an HTTP response with optional headers and body
pub fn log_response(
    status: u16,
    duration_ms: u128,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
    max_body_len: usize,
) {
    info!(
        target: constants::LOG_TARGET_CLIENT,
        "← {} ({}ms)",
        status,
        duration_ms
    );

    if let Some(header_map) = headers {
        log_headers("Response", header_map);
    }

    let Some(body_content) = body else {
        return;
    };

    let (shown, truncated) = truncate_body(body_content, max_body_len);
    if truncated {
        trace!(
            target: constants::LOG_TARGET_CLIENT,
            "Response body: {} (truncated at {} chars)",
            shown,
            max_body_len
        );
    } else {
        trace!(
            target: constants::LOG_TARGET_CLIENT,
            "Response body: {}",
            shown
        );
    }
}

/// Cuts `body` to at most `max_chars` characters.
///
/// Returns the kept prefix and whether anything was dropped.
#[must_use]
pub fn truncate_body(body: &str, max_chars: usize) -> (&str, bool) {
    match body.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&body[..byte_idx], true),
        None => (body, false),
    }
}

/// Gets the maximum body length from `SEARCH_RADAR_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}
