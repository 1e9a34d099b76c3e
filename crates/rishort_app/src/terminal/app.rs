use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rishort_core::{update, AppState, Msg};
use rishort_engine::{EngineHandle, SystemClipboard};
use rishort_logging::rishort_debug;

use super::effects::EffectRunner;
use super::render::render;
use crate::cli::Cli;
use crate::config::AppConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Shortens the URL given on the command line, or every line of stdin.
///
/// Returns `false` when at least one URL could not be shortened.
pub fn run_app(cli: &Cli, config: &AppConfig) -> Result<bool> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let engine = EngineHandle::new(config.submit_settings()).context("starting engine")?;
    let runner = EffectRunner::new(engine, Box::new(SystemClipboard::default()), msg_tx);
    let mut app = TerminalApp::new(runner, msg_rx, io::stdout().lock());

    let mut all_ok = true;
    match &cli.url {
        Some(url) => all_ok &= app.shorten(url, cli.copy)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("reading stdin")?;
                let url = line.trim();
                if url.is_empty() {
                    continue;
                }
                all_ok &= app.shorten(url, cli.copy)?;
            }
        }
    }
    Ok(all_ok)
}

struct TerminalApp<W: Write> {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    out: W,
    last_frame: Vec<String>,
}

impl<W: Write> TerminalApp<W> {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            msg_rx,
            out,
            last_frame: Vec::new(),
        }
    }

    fn shorten(&mut self, url: &str, copy: bool) -> Result<bool> {
        self.dispatch(Msg::InputChanged(url.to_string()))?;
        self.dispatch(Msg::Submitted)?;
        if self.state.active_submission().is_none() {
            return Ok(false);
        }
        self.pump_while_busy()?;

        if self.state.view().short_url.is_none() {
            if let Some(failure) = self.state.last_failure() {
                rishort_debug!("Shortening {} failed: {}", url, failure);
            }
            return Ok(false);
        }
        if copy {
            self.dispatch(Msg::CopyClicked)?;
            self.pump_while_busy()?;
        }
        Ok(true)
    }

    fn pump_while_busy(&mut self) -> Result<()> {
        while self.state.view().busy {
            for msg in self.runner.drain_engine_events() {
                self.dispatch(msg)?;
            }
            match self.msg_rx.recv_timeout(POLL_INTERVAL) {
                Ok(msg) => self.dispatch(msg)?,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => bail!("message channel closed"),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.runner.run(effects)?;
        if was_dirty {
            self.print_frame(render(&view, Utc::now()))?;
        }
        Ok(())
    }

    /// Prints only the lines that were not on screen in the previous frame.
    fn print_frame(&mut self, frame: Vec<String>) -> io::Result<()> {
        for line in frame.iter().filter(|line| !self.last_frame.contains(line)) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        self.last_frame = frame;
        Ok(())
    }
}
