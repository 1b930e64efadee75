//! Strider - shortest weighted paths between the nodes of CSV edge lists.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use strider::{error::ExitCode as StriderExitCode, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(u8::from(StriderExitCode::Success)),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(u8::from(e.exit_code()))
        }
    }
}
