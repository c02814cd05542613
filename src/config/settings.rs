//! Effective runtime settings
//!
//! Merges CLI flags, environment variables and `config.toml` into the values
//! the client and authentication strategy run with. Precedence is
//! flag > environment > file > default.

use crate::config::models::FileConfig;
use crate::constants;
use crate::error::Error;
use std::time::Duration;

/// Maximum allowed timeout value (1 year in seconds).
const MAX_TIMEOUT_SECS: u64 = 365 * 24 * 60 * 60;

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub signon_command: String,
    pub access_token: Option<String>,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a resolved value fails validation.
    pub fn resolve(overrides: &Overrides, file: FileConfig) -> Result<Self, Error> {
        Self::resolve_with_env(overrides, file, |key| std::env::var(key).ok())
    }

    /// Resolves settings with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the timeout is out of range.
    pub fn resolve_with_env(
        overrides: &Overrides,
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let base_url = non_empty(overrides.base_url.clone())
            .or_else(|| non_empty(env(constants::ENV_BASE_URL)))
            .or_else(|| non_empty(file.base_url))
            .unwrap_or_else(|| constants::DEFAULT_BASE_URL.to_string());
        let base_url = validate_base_url(&base_url)?;

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(constants::DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECS {
            return Err(Error::invalid_config(
                "timeout_secs",
                &format!("{timeout_secs} is outside 1..={MAX_TIMEOUT_SECS}"),
            ));
        }

        let signon_command = non_empty(file.signon_command)
            .unwrap_or_else(|| constants::DEFAULT_SIGNON_COMMAND.to_string());

        let access_token =
            non_empty(env(constants::ENV_ACCESS_TOKEN)).or_else(|| non_empty(file.access_token));

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            signon_command,
            access_token,
        })
    }

    /// Joins a relative endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Checks the scheme and strips trailing slashes.
fn validate_base_url(url: &str) -> Result<String, Error> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(Error::invalid_config(
            "base_url",
            &format!("'{url}' must start with http:// or https://"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings =
            Settings::resolve_with_env(&Overrides::default(), FileConfig::default(), env_of(&[]))
                .unwrap();
        assert_eq!(settings.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.signon_command, "curl");
        assert_eq!(settings.access_token, None);
    }

    #[test]
    fn test_flag_beats_env_beats_file() {
        let file = FileConfig {
            base_url: Some("https://file.example".to_string()),
            ..FileConfig::default()
        };
        let env = env_of(&[(constants::ENV_BASE_URL, "https://env.example")]);

        let from_env =
            Settings::resolve_with_env(&Overrides::default(), file.clone(), &env).unwrap();
        assert_eq!(from_env.base_url, "https://env.example");

        let overrides = Overrides {
            base_url: Some("https://flag.example/".to_string()),
            timeout_secs: None,
        };
        let from_flag = Settings::resolve_with_env(&overrides, file, &env).unwrap();
        assert_eq!(from_flag.base_url, "https://flag.example");
    }

    #[test]
    fn test_env_token_beats_file_token() {
        let file = FileConfig {
            access_token: Some("file-token".to_string()),
            ..FileConfig::default()
        };
        let settings = Settings::resolve_with_env(
            &Overrides::default(),
            file.clone(),
            env_of(&[(constants::ENV_ACCESS_TOKEN, "env-token")]),
        )
        .unwrap();
        assert_eq!(settings.access_token.as_deref(), Some("env-token"));

        let blank_env = Settings::resolve_with_env(
            &Overrides::default(),
            file,
            env_of(&[(constants::ENV_ACCESS_TOKEN, " ")]),
        )
        .unwrap();
        assert_eq!(blank_env.access_token.as_deref(), Some("file-token"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let overrides = Overrides {
            base_url: None,
            timeout_secs: Some(0),
        };
        let err = Settings::resolve_with_env(&overrides, FileConfig::default(), env_of(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let file = FileConfig {
            base_url: Some("ftp://radar".to_string()),
            ..FileConfig::default()
        };
        let err =
            Settings::resolve_with_env(&Overrides::default(), file, env_of(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let settings =
            Settings::resolve_with_env(&Overrides::default(), FileConfig::default(), env_of(&[]))
                .unwrap();
        assert_eq!(
            settings.endpoint("/problems/find"),
            "https://radar-webservices.apple.com/problems/find"
        );
    }
}
