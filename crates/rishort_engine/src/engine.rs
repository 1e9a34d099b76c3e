use std::sync::mpsc;
use std::thread;

use rishort_core::SubmissionId;

use crate::signal::ChannelSignalSink;
use crate::{EngineError, EngineEvent, ResilientSubmitter, SubmitSettings};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        long_url: String,
    },
}

/// Runs submissions on a background thread that owns a tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        Self::with_submitter(ResilientSubmitter::from_settings(settings))
    }

    pub fn with_submitter(submitter: ResilientSubmitter) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&submitter, command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(
        &self,
        submission_id: SubmissionId,
        long_url: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Submit {
                submission_id,
                long_url: long_url.into(),
            })
            .map_err(|_| EngineError::Disconnected)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; fails once the worker is gone.
    pub fn recv(&self) -> Result<EngineEvent, EngineError> {
        self.event_rx.recv().map_err(|_| EngineError::Disconnected)
    }
}

async fn handle_command(
    submitter: &ResilientSubmitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            long_url,
        } => {
            let sink = ChannelSignalSink::new(submission_id, event_tx);
            submitter.submit(&long_url, &sink).await;
        }
    }
}
