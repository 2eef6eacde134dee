//! nwcalc: IPv4 dotted-decimal / integer converter

use clap::Parser;
use nwcalc::cli::{execute, Cli};
use nwcalc::utils::init_logging;
use std::process::ExitCode;
use tracing::warn;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: {e}");
    }

    let rendered = execute(&cli.command).and_then(|report| report.render(&config.output));
    match rendered {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
