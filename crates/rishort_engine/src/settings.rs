use std::time::Duration;

use crate::RetryPolicy;

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Base URL of the shortening service, e.g. `http://localhost:8000`.
    pub api_base: String,
    pub connect_timeout: Duration,
    /// Per-attempt timeout; nothing bounds the submission as a whole.
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl SubmitSettings {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }

    /// `POST` target for shortening requests.
    pub fn shorten_endpoint(&self) -> String {
        format!("{}/shorten", self.api_base.trim_end_matches('/'))
    }
}
