use crate::{FailureReason, LifecycleSignal, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for shortening.
    Submitted,
    /// Engine lifecycle signal for a submission.
    SubmissionSignal {
        submission_id: SubmissionId,
        signal: LifecycleSignal,
    },
    /// User clicked Copy next to the short link.
    CopyClicked,
    /// Clipboard collaborator finished writing.
    CopyCompleted(Result<(), FailureReason>),
    /// The "Copied!" confirmation has been shown long enough.
    CopiedResetElapsed,
    /// Fallback for placeholder wiring.
    NoOp,
}
