//! Authentication strategies for the Radar web service
//!
//! A strategy yields the token sent in the `Radar-Authentication` header.
//! Tokens come either pre-issued (environment or config file) or from the
//! SSO signon endpoint, which is negotiated through `curl --negotiate`.

pub mod runner;

use crate::config::settings::Settings;
use crate::constants;
use crate::error::Error;
use runner::{CommandRunner, ProcessRunner};
use serde_json::Value;
use tracing::debug;

/// Supplies the access token for each client session.
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationStrategy {
    /// Returns a token for the `Radar-Authentication` header.
    ///
    /// # Errors
    ///
    /// Returns an error if no token can be obtained.
    fn access_token(&self) -> Result<String, Error>;
}

/// A token issued ahead of time.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self { token }
    }
}

impl AuthenticationStrategy for StaticToken {
    fn access_token(&self) -> Result<String, Error> {
        debug!(target: constants::LOG_TARGET_AUTH, "using pre-issued access token");
        Ok(self.token.clone())
    }
}

/// Exchanges the user's SSO session for a token at the signon endpoint.
pub struct SignonAuthentication<R: CommandRunner> {
    runner: R,
    program: String,
    signon_url: String,
}

impl<R: CommandRunner> SignonAuthentication<R> {
    pub fn with_runner(runner: R, program: impl Into<String>, signon_url: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            signon_url: signon_url.into(),
        }
    }

    /// Arguments passed to the signon program.
    #[must_use]
    pub fn signon_args(&self) -> Vec<String> {
        [
            "--no-progress-meter",
            "-X",
            "GET",
            "-H",
            "Accept: application/json",
            "--negotiate",
            "-u",
            ":",
            self.signon_url.as_str(),
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}

impl SignonAuthentication<ProcessRunner> {
    #[must_use]
    pub fn new(program: impl Into<String>, signon_url: impl Into<String>) -> Self {
        Self::with_runner(ProcessRunner, program, signon_url)
    }
}

impl<R: CommandRunner> AuthenticationStrategy for SignonAuthentication<R> {
    fn access_token(&self) -> Result<String, Error> {
        debug!(
            target: constants::LOG_TARGET_AUTH,
            "requesting access token from {}",
            self.signon_url
        );
        let output = self.runner.run(&self.program, &self.signon_args())?;
        parse_signon_response(&output)
    }
}

/// Extracts `accessToken` from a signon reply.
///
/// # Errors
///
/// Returns an error if the reply is not JSON or lacks a non-empty token.
pub fn parse_signon_response(body: &[u8]) -> Result<String, Error> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        Error::authentication(format!("signon reply is not valid JSON: {e}"))
    })?;

    match value.get(constants::SIGNON_TOKEN_KEY).and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::authentication(format!(
            "signon reply has no '{}'",
            constants::SIGNON_TOKEN_KEY
        ))),
    }
}

/// The strategy selected from resolved settings.
pub enum Authenticator {
    Static(StaticToken),
    Signon(SignonAuthentication<ProcessRunner>),
}

impl Authenticator {
    /// Prefers a pre-issued token and otherwise signs on.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        settings.access_token.as_ref().map_or_else(
            || {
                Self::Signon(SignonAuthentication::new(
                    settings.signon_command.clone(),
                    settings.endpoint(constants::PATH_SIGNON),
                ))
            },
            |token| Self::Static(StaticToken::new(token.clone())),
        )
    }
}

impl AuthenticationStrategy for Authenticator {
    fn access_token(&self) -> Result<String, Error> {
        match self {
            Self::Static(strategy) => strategy.access_token(),
            Self::Signon(strategy) => strategy.access_token(),
        }
    }
}
