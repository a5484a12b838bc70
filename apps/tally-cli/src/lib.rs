//! # Tally CLI Library
//!
//! Everything behind the `tally` binary, kept in a library for testability.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs          ◄─── You are here (run: config → command → output)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── tally.toml + environment overrides
//! ├── logging.rs      ◄─── tracing subscriber setup
//! ├── render.rs       ◄─── plain-text output
//! ├── commands/
//! │   ├── mod.rs
//! │   ├── change.rs
//! │   ├── breakdown.rs
//! │   └── denominations.rs
//! └── error.rs        ◄─── AppError / ConfigError
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

use serde::Serialize;
use tally_core::{CoreError, Register};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::AppError;

/// Runs one CLI invocation and returns what should be printed on stdout.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    if let Some(code) = cli.currency.as_deref() {
        config.check_requested_currency(code).map_err(CoreError::from)?;
    }
    let currency = config.active_currency(cli.currency.as_deref())?;
    let max_change = config.register.max_change;

    debug!(
        currency = currency.code(),
        max_change,
        denominations = currency.denominations().len(),
        "configuration resolved"
    );

    match &cli.command {
        Commands::Change(args) => {
            let mut register = Register::with_max_change(currency.clone(), max_change);
            let receipt = commands::change::change(&mut register, args)?;
            output(cli.json, &receipt, || render::receipt(&currency, &receipt))
        }
        Commands::Breakdown(args) => {
            let response = commands::breakdown::breakdown(&currency, max_change, args)?;
            output(cli.json, &response, || render::breakdown(&currency, &response))
        }
        Commands::Denominations => {
            let response = commands::denominations::denominations(&currency);
            output(cli.json, &response, || render::denominations(&response))
        }
    }
}

fn output<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BreakdownArgs, ChangeArgs};
    use crate::error::ErrorCode;
    use std::io::Write;

    fn cli_with_config(command: Commands, json: bool, currency: Option<&str>) -> (Cli, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[register]\ncurrency = \"USD\"\n").unwrap();
        let cli = Cli {
            currency: currency.map(str::to_string),
            config: Some(file.path().to_path_buf()),
            json,
            verbose: false,
            command,
        };
        (cli, file)
    }

    #[test]
    fn test_run_change_text() {
        let (cli, _file) = cli_with_config(
            Commands::Change(ChangeArgs {
                price: "2.14".into(),
                paid: "20".into(),
            }),
            false,
            Some("USD"),
        );
        let out = run(&cli).unwrap();
        assert!(out.starts_with("Transaction #1\n"));
        assert!(out.contains("Change: $17.86 (9 pieces)"));
    }

    #[test]
    fn test_run_breakdown_json() {
        let (cli, _file) = cli_with_config(
            Commands::Breakdown(BreakdownArgs { amount: "8".into() }),
            true,
            Some("inr"),
        );
        let out = run(&cli).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["outcome"]["status"], "breakdown");
        assert_eq!(json["outcome"]["entries"][0]["value"], 5);
    }

    #[test]
    fn test_run_unknown_currency() {
        let (cli, _file) = cli_with_config(Commands::Denominations, false, Some("GBP"));
        let err = run(&cli).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.code.exit_code(), 1);
        assert!(err.message.contains("currency must be one of"));
        assert!(err.message.contains("USD"));
    }

    #[test]
    fn test_run_change_json_has_transaction() {
        let (cli, _file) = cli_with_config(
            Commands::Change(ChangeArgs {
                price: "1".into(),
                paid: "5".into(),
            }),
            true,
            None,
        );
        let out = run(&cli).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["transaction"], 1);
        assert_eq!(json["change"], 400);
    }
}
