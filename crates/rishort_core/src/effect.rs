use std::time::Duration;

/// How long the "Copied!" confirmation stays visible.
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit {
        submission_id: crate::SubmissionId,
        long_url: String,
    },
    CopyToClipboard { text: String },
    ResetCopiedAfter(Duration),
}
