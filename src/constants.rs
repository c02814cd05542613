//! Centralized string constants for search-radar
//!
//! Header names, environment variables and defaults shared by the client,
//! the authentication strategies and the CLI.

// HTTP Headers
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_RADAR_AUTHENTICATION: &str = "Radar-Authentication";
pub const HEADER_FIELDS_REQUESTED: &str = "X-Fields-Requested";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Radar web service
pub const DEFAULT_BASE_URL: &str = "https://radar-webservices.apple.com";
pub const PATH_PROBLEMS_FIND: &str = "problems/find";
pub const PATH_SIGNON: &str = "signon";
pub const SIGNON_TOKEN_KEY: &str = "accessToken";
pub const DEFAULT_SIGNON_COMMAND: &str = "curl";

/// Fields requested for every search result, in output order.
pub const SEARCH_FIELDS: [&str; 6] = [
    "id",
    "title",
    "state",
    "classification",
    "priority",
    "lastModifiedAt",
];

/// The record field matched against the keyword.
pub const TITLE_FIELD: &str = "title";

// Environment Variables
pub const ENV_CONFIG_DIR: &str = "SEARCH_RADAR_CONFIG_DIR";
pub const ENV_BASE_URL: &str = "RADAR_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "RADAR_ACCESS_TOKEN";
pub const ENV_LOG: &str = "SEARCH_RADAR_LOG";
pub const ENV_LOG_FORMAT: &str = "SEARCH_RADAR_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "SEARCH_RADAR_LOG_FILE";
pub const ENV_LOG_MAX_BODY: &str = "SEARCH_RADAR_LOG_MAX_BODY";

// Config
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_DIR_NAME: &str = "search-radar";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Common Response Messages
pub const EMPTY_RESPONSE: &str = "(empty response)";

// Log targets
pub const LOG_TARGET_CLIENT: &str = "search_radar::client";
pub const LOG_TARGET_AUTH: &str = "search_radar::auth";
