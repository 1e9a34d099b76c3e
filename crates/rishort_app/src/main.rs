mod cli;
mod config;
mod terminal;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::AppConfig;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    rishort_logging::initialize(cli.log.into(), cli.log_level());

    let config = AppConfig::from_env(cli.api_url.clone())?;
    if terminal::run_app(&cli, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
