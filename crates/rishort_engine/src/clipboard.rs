use std::io::{self, Write};
use std::process::{Command, Stdio};

use rishort_core::FailureReason;
use rishort_logging::rishort_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available (tried {tried})")]
    Unavailable { tried: String },
    #[error("clipboard command `{program}` failed: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("clipboard command `{program}` exited with {status}")]
    Exit { program: String, status: String },
}

impl From<ClipboardError> for FailureReason {
    fn from(err: ClipboardError) -> Self {
        FailureReason::ClipboardWriteFailed {
            message: err.to_string(),
        }
    }
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A program that reads the text to copy from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Copies through the platform clipboard utilities, trying each in order.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_commands(platform_commands())
    }
}

impl SystemClipboard {
    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    fn run(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
        let io_err = |source| ClipboardError::Io {
            program: command.program.clone(),
            source,
        };
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits before reading is judged by its exit status.
            match stdin.write_all(text.as_bytes()) {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => return Err(io_err(err)),
                _ => {}
            }
        }
        let status = child.wait().map_err(io_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit {
                program: command.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = None;
        for command in &self.commands {
            match Self::run(command, text) {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Io { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    rishort_debug!("Clipboard command {} not installed", command.program);
                }
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or_else(|| ClipboardError::Unavailable {
            tried: self
                .commands
                .iter()
                .map(|command| command.program.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }))
    }
}

fn platform_commands() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![ClipboardCommand::new("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![ClipboardCommand::new("clip", &[])]
    } else {
        vec![
            ClipboardCommand::new("wl-copy", &[]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}
