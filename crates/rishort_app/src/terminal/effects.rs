use std::sync::mpsc;
use std::thread;

use rishort_core::{Effect, FailureReason, Msg};
use rishort_engine::{Clipboard, EngineError, EngineEvent, EngineHandle};
use rishort_logging::{rishort_info, rishort_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn Clipboard>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn Clipboard>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            msg_tx,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Result<(), EngineError> {
        for effect in effects {
            match effect {
                Effect::Submit {
                    submission_id,
                    long_url,
                } => {
                    rishort_info!(
                        "Submit submission_id={} url_len={} url={}",
                        submission_id,
                        long_url.len(),
                        long_url
                    );
                    self.engine.submit(submission_id, long_url)?;
                }
                Effect::CopyToClipboard { text } => {
                    let result = self.clipboard.write_text(&text).map_err(|err| {
                        rishort_warn!("Copy to clipboard failed: {}", err);
                        FailureReason::from(err)
                    });
                    let _ = self.msg_tx.send(Msg::CopyCompleted(result));
                }
                Effect::ResetCopiedAfter(delay) => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::CopiedResetElapsed);
                    });
                }
            }
        }
        Ok(())
    }

    /// Pending engine events, translated into messages.
    pub fn drain_engine_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(|event| match event {
                EngineEvent::Signal {
                    submission_id,
                    signal,
                } => Msg::SubmissionSignal {
                    submission_id,
                    signal,
                },
            })
            .collect()
    }
}
