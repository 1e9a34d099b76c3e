use crate::view_model::{AppViewModel, SubmitLabel};
use crate::{
    format_time_remaining, is_valid_url, FailureReason, SubmissionId, SubmissionResult,
};

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";
pub const REQUEST_FAILED_MESSAGE: &str = "Error shortening URL. Please try again.";
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    long_url: String,
    url_error: Option<String>,
    error: Option<String>,
    last_failure: Option<FailureReason>,
    short_url: Option<String>,
    expires_in: Option<u64>,
    is_loading: bool,
    is_retrying: bool,
    copied: bool,
    copying: bool,
    active_submission: Option<SubmissionId>,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let submit_label = match (self.is_loading, self.is_retrying) {
            (false, _) => SubmitLabel::Shorten,
            (true, false) => SubmitLabel::Shortening,
            (true, true) => SubmitLabel::Retrying,
        };
        // A zero expiration is treated like a missing one.
        let expires_in_seconds = self.expires_in.filter(|seconds| *seconds > 0);
        let expiration_text = expires_in_seconds
            .map(|seconds| format!("Link expires in {}", format_time_remaining(seconds)));

        AppViewModel {
            long_url: self.long_url.clone(),
            url_error: self.url_error.clone(),
            submit_label,
            submit_enabled: self.can_submit(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            short_url: self.short_url.clone(),
            expiration_text,
            expires_in_seconds,
            copied: self.copied,
            busy: self.is_loading || self.copying,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Diagnostics for the most recent failure, including per-attempt detail
    /// that the user-facing message deliberately hides.
    pub fn last_failure(&self) -> Option<&FailureReason> {
        self.last_failure.as_ref()
    }

    pub fn active_submission(&self) -> Option<SubmissionId> {
        self.active_submission
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.is_loading && self.url_error.is_none()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.url_error = if !text.is_empty() && !is_valid_url(&text) {
            Some(INVALID_URL_MESSAGE.to_string())
        } else {
            None
        };
        self.long_url = text;
        self.mark_dirty();
    }

    pub(crate) fn input(&self) -> &str {
        &self.long_url
    }

    pub(crate) fn reject_input(&mut self) {
        self.url_error = Some(INVALID_URL_MESSAGE.to_string());
        self.mark_dirty();
    }

    /// Clears the previous outcome and opens a new submission.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        let submission_id = self.next_submission_id;
        self.active_submission = Some(submission_id);
        self.is_loading = true;
        self.is_retrying = false;
        self.error = None;
        self.last_failure = None;
        self.short_url = None;
        self.copied = false;
        self.expires_in = None;
        self.mark_dirty();
        submission_id
    }

    pub(crate) fn is_active(&self, submission_id: SubmissionId) -> bool {
        self.active_submission == Some(submission_id)
    }

    pub(crate) fn mark_retrying(&mut self) {
        if !self.is_retrying {
            self.is_retrying = true;
            self.mark_dirty();
        }
    }

    pub(crate) fn complete_submission(&mut self, result: SubmissionResult) {
        self.active_submission = None;
        self.is_loading = false;
        self.is_retrying = false;
        match result {
            SubmissionResult::Success {
                short_url,
                expires_in_seconds,
            } => {
                self.short_url = Some(short_url);
                self.expires_in = expires_in_seconds;
            }
            SubmissionResult::Failure { reason } => {
                match reason {
                    FailureReason::InvalidUrl => {
                        self.url_error = Some(INVALID_URL_MESSAGE.to_string());
                    }
                    FailureReason::RequestFailed { .. } => {
                        self.error = Some(REQUEST_FAILED_MESSAGE.to_string());
                    }
                    FailureReason::ClipboardWriteFailed { .. } => {
                        self.error = Some(CLIPBOARD_FAILED_MESSAGE.to_string());
                    }
                }
                self.last_failure = Some(reason);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub(crate) fn begin_copy(&mut self) {
        self.copying = true;
        self.mark_dirty();
    }

    pub(crate) fn finish_copy(&mut self, result: Result<(), FailureReason>) {
        self.copying = false;
        match result {
            Ok(()) => self.copied = true,
            Err(reason) => {
                self.error = Some(CLIPBOARD_FAILED_MESSAGE.to_string());
                self.last_failure = Some(reason);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn reset_copied(&mut self) {
        if self.copied {
            self.copied = false;
            self.mark_dirty();
        }
    }
}
