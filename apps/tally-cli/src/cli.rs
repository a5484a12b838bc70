//! CLI definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tally - minimum-piece change calculator
///
/// Works out how to hand back change with the fewest coins and bills.
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    author,
    version,
    about = "Minimum-piece change calculator",
    after_help = "Examples:\n    \
                  tally change --price 42 --paid 50\n    \
                  tally --currency usd change --price 2.14 --paid 20\n    \
                  tally --currency usd breakdown 17.86 --json\n    \
                  tally denominations"
)]
pub struct Cli {
    /// Currency code (overrides config and TALLY_CURRENCY)
    #[arg(long, short = 'c', global = true)]
    pub currency: Option<String>,

    /// Path to a tally.toml config file
    #[arg(long, global = true, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take a price and a payment, and hand back change
    Change(ChangeArgs),

    /// Break an amount down into the fewest pieces
    Breakdown(BreakdownArgs),

    /// List the denominations of the active currency
    Denominations,
}

/// Arguments for the change command
#[derive(Args, Debug)]
pub struct ChangeArgs {
    /// Item price, e.g. 17.90
    #[arg(long, short = 'p')]
    pub price: String,

    /// Amount the customer paid, e.g. 20
    #[arg(long)]
    pub paid: String,
}

/// Arguments for the breakdown command
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Amount to break down, in display units (e.g. 17.86)
    pub amount: String,
}
