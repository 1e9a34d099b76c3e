//! RiShort core: URL validation, submission data model, and the pure form state machine.
mod effect;
mod format;
mod msg;
mod state;
mod submission;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, COPIED_RESET_DELAY};
pub use format::format_time_remaining;
pub use msg::Msg;
pub use state::{
    AppState, CLIPBOARD_FAILED_MESSAGE, INVALID_URL_MESSAGE, REQUEST_FAILED_MESSAGE,
};
pub use submission::{
    FailureReason, LifecycleSignal, RequestError, RequestErrorKind, SubmissionId,
    SubmissionRequest, SubmissionResult,
};
pub use update::update;
pub use validate::is_valid_url;
pub use view_model::{AppViewModel, SubmitLabel};
