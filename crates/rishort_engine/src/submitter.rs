use std::sync::Arc;

use rishort_core::{
    FailureReason, LifecycleSignal, SubmissionRequest, SubmissionResult,
};
use rishort_logging::{rishort_debug, rishort_error, rishort_info, rishort_warn};

use crate::retry::RetryState;
use crate::{ReqwestTransport, RetryPolicy, SignalSink, Sleeper, SubmitSettings, TokioSleeper, Transport};

/// Runs one shorten operation to a terminal result, retrying failed attempts
/// with exponential backoff.
#[derive(Clone)]
pub struct ResilientSubmitter {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    policy: RetryPolicy,
}

impl ResilientSubmitter {
    pub fn new(
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// Submitter backed by reqwest and the tokio timer.
    pub fn from_settings(settings: SubmitSettings) -> Self {
        let policy = settings.retry;
        Self::new(
            Arc::new(ReqwestTransport::new(settings)),
            Arc::new(TokioSleeper),
            policy,
        )
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Validates `long_url`, then submits it until it succeeds or the retry
    /// budget runs out. Every outcome is returned as data and also emitted to
    /// `sink` as the final `Completed` signal.
    pub async fn submit(&self, long_url: &str, sink: &dyn SignalSink) -> SubmissionResult {
        let result = match SubmissionRequest::new(long_url) {
            Ok(request) => self.run(&request, sink).await,
            Err(reason) => {
                rishort_warn!("Rejected submission, invalid url_len={}", long_url.len());
                SubmissionResult::failure(reason)
            }
        };
        sink.emit(LifecycleSignal::Completed(result.clone()));
        result
    }

    async fn run(&self, request: &SubmissionRequest, sink: &dyn SignalSink) -> SubmissionResult {
        let mut retry = RetryState::new(&self.policy);
        let mut attempt: u32 = 1;

        loop {
            sink.emit(LifecycleSignal::Submitting);
            rishort_debug!(
                "Shorten attempt {}/{} url={}",
                attempt,
                self.policy.max_attempts(),
                request.long_url()
            );

            let last_error = match self.transport.shorten(request.long_url()).await {
                Ok(response) => {
                    rishort_info!(
                        "Shortened url={} short_url={} attempts={}",
                        request.long_url(),
                        response.short_url,
                        attempt
                    );
                    return SubmissionResult::Success {
                        short_url: response.short_url,
                        expires_in_seconds: response.expires_in,
                    };
                }
                Err(err) => err,
            };

            if !last_error.kind.is_retryable() {
                rishort_error!(
                    "Shorten attempt {} returned an unusable response: {}",
                    attempt,
                    last_error
                );
                return SubmissionResult::failure(FailureReason::RequestFailed { last_error });
            }

            let Some(delay) = retry.advance(&self.policy) else {
                rishort_error!(
                    "Shorten failed after {} attempts: {}",
                    attempt,
                    last_error
                );
                return SubmissionResult::failure(FailureReason::RequestFailed { last_error });
            };

            rishort_warn!(
                "Shorten attempt {} failed: {}; retrying in {:?} ({} retries left)",
                attempt,
                last_error,
                delay,
                retry.attempts_remaining
            );
            sink.emit(LifecycleSignal::Retrying);
            self.sleeper.sleep(delay).await;
            attempt += 1;
        }
    }
}
