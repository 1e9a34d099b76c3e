//! RiShort engine: resilient submission pipeline and effect execution.
mod clipboard;
mod engine;
mod retry;
mod settings;
mod signal;
mod sleeper;
mod submitter;
mod transport;
mod types;

pub use clipboard::{Clipboard, ClipboardCommand, ClipboardError, SystemClipboard};
pub use engine::EngineHandle;
pub use retry::{RetryPolicy, BASE_DELAY, MAX_RETRIES};
pub use settings::SubmitSettings;
pub use signal::{ChannelSignalSink, NullSignalSink, SignalSink};
pub use sleeper::{Sleeper, TokioSleeper, TrackingSleeper};
pub use submitter::ResilientSubmitter;
pub use transport::{ReqwestTransport, Transport};
pub use types::{EngineError, EngineEvent, ShortenResponse};
