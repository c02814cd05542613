use serde::{Deserialize, Serialize};

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Radar web service root, e.g. `https://radar-webservices.apple.com`
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Program used for the SSO signon exchange
    pub signon_command: Option<String>,
    /// Pre-issued access token; skips signon when set
    pub access_token: Option<String>,
}
