//! # Breakdown Command

use serde::Serialize;
use tally_core::{solve_bounded, ChangeOutcome, CoreError, Currency};
use tracing::{debug, info};

use crate::cli::BreakdownArgs;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub currency: String,
    pub amount: u64,
    pub outcome: ChangeOutcome,
}

/// Breaks an amount down without a price/paid pair.
///
/// An unreachable amount is reported as an error so the exit status tells
/// scripts the breakdown is unusable.
pub fn breakdown(
    currency: &Currency,
    max_change: u64,
    args: &BreakdownArgs,
) -> Result<BreakdownResponse, AppError> {
    debug!(amount = %args.amount, "breakdown command");

    let amount = currency
        .parse_amount(&args.amount)
        .map_err(CoreError::from)?;

    let outcome = solve_bounded(amount, currency.denominations(), max_change)?;
    if let ChangeOutcome::Infeasible { amount } = outcome {
        return Err(CoreError::ExactChangeUnavailable { amount }.into());
    }

    info!(
        currency = currency.code(),
        amount,
        pieces = outcome.piece_count(),
        "breakdown calculated"
    );

    Ok(BreakdownResponse {
        currency: currency.code().to_string(),
        amount,
        outcome,
    })
}
