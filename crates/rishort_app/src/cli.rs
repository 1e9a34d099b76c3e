use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rishort_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "rishort",
    version,
    about = "Transform long URLs into short, shareable links"
)]
pub struct Cli {
    /// URL to shorten. When omitted, URLs are read from stdin, one per line.
    pub url: Option<String>,

    /// Base URL of the shortening service (overrides RISHORT_API_URL).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Copy each shortened URL to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log per-attempt detail.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}
