//! # Tally Command-Line Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Load configuration (file → environment → flags)
//! 4. Run the requested command
//! 5. Map errors to an exit code
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;
use std::process::ExitCode;

use tally_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tally_cli::logging::init(cli.verbose);

    match tally_cli::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(code = ?err.code, "command failed");
            if cli.json {
                match serde_json::to_string_pretty(&err) {
                    Ok(body) => eprintln!("{body}"),
                    Err(_) => eprintln!("{err}"),
                }
            } else {
                eprintln!("❌ {}", err.message);
            }
            ExitCode::from(err.code.exit_code())
        }
    }
}
