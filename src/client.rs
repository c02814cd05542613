//! Radar web service client
//!
//! Wraps a `reqwest::Client` with the authentication strategy and knows the
//! one endpoint this tool needs, `POST problems/find`.

use crate::auth::AuthenticationStrategy;
use crate::config::settings::Settings;
use crate::constants;
use crate::error::Error;
use crate::logging;
use crate::query::{fields_header_value, FindQuery};
use crate::record::RadarRecord;
use reqwest::header::{HeaderMap, HeaderValue};
use std::future::Future;
use std::time::Instant;

const USER_AGENT: &str = concat!("search-radar/", env!("CARGO_PKG_VERSION"));

/// Something that can run a find query.
pub trait ProblemSearch {
    /// Runs `query` and returns matching records in service order.
    fn find_problems(
        &self,
        query: &FindQuery,
        additional_fields: &[&str],
    ) -> impl Future<Output = Result<Vec<RadarRecord>, Error>>;
}

/// Installs the process-wide rustls crypto provider.
///
/// Safe to call more than once; later calls are no-ops.
pub fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();
    let _ = provider.install_default();
}

pub struct RadarClient<A: AuthenticationStrategy> {
    http: reqwest::Client,
    base_url: String,
    auth: A,
}

impl<A: AuthenticationStrategy> RadarClient<A> {
    /// Builds a client for the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: &Settings, auth: A) -> Result<Self, Error> {
        install_crypto_provider();
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            auth,
        })
    }

    fn request_headers(&self, additional_fields: &[&str]) -> Result<HeaderMap, Error> {
        let token = self.auth.access_token()?;
        let mut token_value = HeaderValue::from_str(&token).map_err(|_| {
            Error::authentication("access token contains characters not allowed in a header")
        })?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(constants::HEADER_RADAR_AUTHENTICATION, token_value);
        headers.insert(
            constants::HEADER_CONTENT_TYPE,
            HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
        );
        headers.insert(
            constants::HEADER_ACCEPT,
            HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
        );
        if !additional_fields.is_empty() {
            let fields = HeaderValue::from_str(&fields_header_value(additional_fields))
                .map_err(|_| Error::Config("field names must be ASCII".to_string()))?;
            headers.insert(constants::HEADER_FIELDS_REQUESTED, fields);
        }
        Ok(headers)
    }
}

impl<A: AuthenticationStrategy> ProblemSearch for RadarClient<A> {
    async fn find_problems(
        &self,
        query: &FindQuery,
        additional_fields: &[&str],
    ) -> Result<Vec<RadarRecord>, Error> {
        let url = format!("{}/{}", self.base_url, constants::PATH_PROBLEMS_FIND);
        let headers = self.request_headers(additional_fields)?;
        let body = serde_json::to_string(query)?;

        logging::log_request("POST", &url, Some(&headers), Some(&body));
        let started = Instant::now();

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let text = response.text().await?;

        logging::log_response(
            status.as_u16(),
            started.elapsed().as_millis(),
            Some(&response_headers),
            Some(&text),
            logging::get_max_body_len(),
        );

        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), text));
        }

        parse_find_response(&text)
    }
}

/// Decodes a `problems/find` body into records.
///
/// # Errors
///
/// Returns an error unless the body is a JSON array of objects.
pub fn parse_find_response(body: &str) -> Result<Vec<RadarRecord>, Error> {
    serde_json::from_str(body).map_err(|e| {
        Error::invalid_response(format!("expected a JSON array of problems: {e}"))
    })
}
