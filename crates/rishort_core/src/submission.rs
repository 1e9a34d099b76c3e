use std::fmt;

use crate::validate::is_valid_url;

/// Identifies one submission issued by the form.
pub type SubmissionId = u64;

/// A long URL that has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    long_url: String,
}

impl SubmissionRequest {
    /// Validates `long_url`; only absolute URLs with a host are accepted.
    pub fn new(long_url: impl Into<String>) -> Result<Self, FailureReason> {
        let long_url = long_url.into();
        if is_valid_url(&long_url) {
            Ok(Self { long_url })
        } else {
            Err(FailureReason::InvalidUrl)
        }
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }
}

/// Terminal outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success {
        short_url: String,
        /// Seconds until the link expires; `None` means it never does.
        expires_in_seconds: Option<u64>,
    },
    Failure {
        reason: FailureReason,
    },
}

impl SubmissionResult {
    pub fn failure(reason: FailureReason) -> Self {
        Self::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Observable state of an in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleSignal {
    #[default]
    Idle,
    Submitting,
    Retrying,
    Completed(SubmissionResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Input was rejected before any network attempt.
    InvalidUrl,
    /// Retries were exhausted, or the service answered with an unreadable body.
    RequestFailed { last_error: RequestError },
    /// Copying the short link failed; the link itself is still valid.
    ClipboardWriteFailed { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InvalidUrl => write!(f, "invalid url"),
            FailureReason::RequestFailed { last_error } => {
                write!(f, "request failed: {last_error}")
            }
            FailureReason::ClipboardWriteFailed { message } => {
                write!(f, "clipboard write failed: {message}")
            }
        }
    }
}

/// Diagnostics for one failed attempt against the shortening service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidResponse,
}

impl RequestErrorKind {
    /// Every non-success status and every transport error is retried alike,
    /// 4xx included. A success response with an unreadable body is not.
    ///
    /// TODO: stop retrying 4xx other than 408 and 429; a rejected URL currently
    /// costs three more attempts and 14 s of backoff before the error shows.
    pub fn is_retryable(self) -> bool {
        !matches!(self, RequestErrorKind::InvalidResponse)
    }
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            RequestErrorKind::Timeout => write!(f, "timeout"),
            RequestErrorKind::Network => write!(f, "network error"),
            RequestErrorKind::InvalidResponse => write!(f, "invalid response body"),
        }
    }
}
