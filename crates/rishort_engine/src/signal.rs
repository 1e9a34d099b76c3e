use std::sync::mpsc;

use rishort_core::{LifecycleSignal, SubmissionId};

use crate::EngineEvent;

/// Receives lifecycle signals while a submission is in flight.
pub trait SignalSink: Send + Sync {
    fn emit(&self, signal: LifecycleSignal);
}

/// Forwards signals for one submission onto the engine event channel.
pub struct ChannelSignalSink {
    submission_id: SubmissionId,
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelSignalSink {
    pub fn new(submission_id: SubmissionId, tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { submission_id, tx }
    }
}

impl SignalSink for ChannelSignalSink {
    fn emit(&self, signal: LifecycleSignal) {
        let _ = self.tx.send(EngineEvent::Signal {
            submission_id: self.submission_id,
            signal,
        });
    }
}

/// Discards every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSignalSink;

impl SignalSink for NullSignalSink {
    fn emit(&self, _signal: LifecycleSignal) {}
}
