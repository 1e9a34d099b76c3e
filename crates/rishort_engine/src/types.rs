use std::io;

use rishort_core::{LifecycleSignal, SubmissionId};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Signal {
        submission_id: SubmissionId,
        signal: LifecycleSignal,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("engine worker has stopped")]
    Disconnected,
}

/// JSON body sent to `POST /shorten`.
#[derive(Debug, Serialize)]
pub(crate) struct ShortenRequestBody<'a> {
    pub long_url: &'a str,
}

/// JSON body returned by a successful `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    /// Seconds until expiration; absent or null means the link does not expire.
    #[serde(default, deserialize_with = "deserialize_expires_in")]
    pub expires_in: Option<u64>,
}

/// Accepts any JSON number. Fractions are floored; negative values count as no expiration.
fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|number| {
        number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
                .map(|seconds| seconds.floor() as u64)
        })
    }))
}
