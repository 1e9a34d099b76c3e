//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is loaded first, if present.
//!
//! ## Variables
//!
//! - `RISHORT_API_URL` - base URL of the shortening service (required unless
//!   `--api-url` is given)
//! - `RISHORT_MAX_RETRIES` - retries after the first attempt (default: 3)
//! - `RISHORT_REQUEST_TIMEOUT_SECS` - per-attempt timeout (default: 30)

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use rishort_core::is_valid_url;
use rishort_engine::{RetryPolicy, SubmitSettings};

pub const API_URL_VAR: &str = "RISHORT_API_URL";
pub const MAX_RETRIES_VAR: &str = "RISHORT_MAX_RETRIES";
pub const REQUEST_TIMEOUT_VAR: &str = "RISHORT_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub max_retries: u32,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no API base URL is configured or a value does not parse.
    pub fn from_env(api_url_override: Option<String>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(api_url_override, |key| env::var(key).ok())
    }

    pub fn from_lookup(
        api_url_override: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_base = match api_url_override.or_else(|| lookup(API_URL_VAR)) {
            Some(url) => url.trim().to_string(),
            None => bail!("{API_URL_VAR} must be set (or pass --api-url)"),
        };
        if !is_valid_url(&api_base) {
            bail!("API base URL is not an absolute URL: {api_base:?}");
        }

        let max_retries = match lookup(MAX_RETRIES_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{MAX_RETRIES_VAR} must be a non-negative integer"))?,
            None => RetryPolicy::default().max_retries,
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{REQUEST_TIMEOUT_VAR} must be a number of seconds"))?,
            ),
            None => SubmitSettings::new(api_base.clone()).request_timeout,
        };

        Ok(Self {
            api_base,
            max_retries,
            request_timeout,
        })
    }

    pub fn submit_settings(&self) -> SubmitSettings {
        let mut settings = SubmitSettings::new(self.api_base.clone());
        settings.request_timeout = self.request_timeout;
        settings.retry.max_retries = self.max_retries;
        settings
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_api_url_and_defaults() {
        let config =
            AppConfig::from_lookup(None, lookup(&[(API_URL_VAR, "http://localhost:8000")]))
                .unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        let settings = config.submit_settings();
        assert_eq!(settings.shorten_endpoint(), "http://localhost:8000/shorten");
        assert_eq!(settings.retry, RetryPolicy::default());
    }

    #[test]
    fn override_wins_over_environment() {
        let config = AppConfig::from_lookup(
            Some("https://api.example.com".to_string()),
            lookup(&[(API_URL_VAR, "http://localhost:8000")]),
        )
        .unwrap();
        assert_eq!(config.api_base, "https://api.example.com");
    }

    #[test]
    fn missing_api_url_is_an_error() {
        let err = AppConfig::from_lookup(None, lookup(&[])).unwrap_err();
        assert!(err.to_string().contains(API_URL_VAR));
    }

    #[test]
    fn relative_api_url_is_rejected() {
        assert!(AppConfig::from_lookup(None, lookup(&[(API_URL_VAR, "localhost:8000")])).is_err());
    }

    #[test]
    fn retry_and_timeout_are_tunable() {
        let config = AppConfig::from_lookup(
            None,
            lookup(&[
                (API_URL_VAR, "http://localhost:8000"),
                (MAX_RETRIES_VAR, "5"),
                (REQUEST_TIMEOUT_VAR, "7"),
            ]),
        )
        .unwrap();
        let settings = config.submit_settings();
        assert_eq!(settings.retry.max_retries, 5);
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
    }

    #[test]
    fn garbage_retry_count_is_an_error() {
        let result = AppConfig::from_lookup(
            None,
            lookup(&[(API_URL_VAR, "http://localhost:8000"), (MAX_RETRIES_VAR, "many")]),
        );
        assert!(result.is_err());
    }
}
