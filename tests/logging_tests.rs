//! Integration tests for request/response logging helpers

use search_radar::logging::{get_max_body_len, should_redact_header, truncate_body};
use std::env;

#[test]
fn test_log_max_body_default_and_custom() {
    let original = env::var("SEARCH_RADAR_LOG_MAX_BODY").ok();

    env::remove_var("SEARCH_RADAR_LOG_MAX_BODY");
    assert_eq!(get_max_body_len(), 1000);

    env::set_var("SEARCH_RADAR_LOG_MAX_BODY", "2000");
    assert_eq!(get_max_body_len(), 2000);

    env::set_var("SEARCH_RADAR_LOG_MAX_BODY", "lots");
    assert_eq!(get_max_body_len(), 1000);

    if let Some(val) = original {
        env::set_var("SEARCH_RADAR_LOG_MAX_BODY", val);
    } else {
        env::remove_var("SEARCH_RADAR_LOG_MAX_BODY");
    }
}

#[test]
fn test_credential_headers_are_redacted() {
    assert!(should_redact_header("Radar-Authentication"));
    assert!(should_redact_header("Cookie"));
    assert!(!should_redact_header("X-Fields-Requested"));
}

#[test]
fn test_truncate_body_multibyte() {
    let body = "日本語のタイトル";
    assert_eq!(truncate_body(body, 3), ("日本語", true));
}
