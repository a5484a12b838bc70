//! Plain-text rendering of command responses.

use std::fmt::Write;

use tally_core::{ChangeOutcome, ChangeReceipt, Currency};

use crate::commands::breakdown::BreakdownResponse;
use crate::commands::denominations::DenominationsResponse;

pub fn receipt(currency: &Currency, receipt: &ChangeReceipt) -> String {
    let mut out = format!("Transaction #{}\n", receipt.transaction);
    let _ = writeln!(
        out,
        "Price: {}   Paid: {}",
        amount_or_raw(currency, receipt.price.to_amount()),
        amount_or_raw(currency, receipt.paid.to_amount()),
    );
    out.push_str(&outcome(currency, receipt.change, &receipt.outcome));
    out
}

pub fn breakdown(currency: &Currency, response: &BreakdownResponse) -> String {
    outcome(currency, response.amount, &response.outcome)
}

pub fn denominations(response: &DenominationsResponse) -> String {
    let mut out = format!("{} ({})\n", response.currency, response.symbol);
    for row in &response.denominations {
        let _ = writeln!(out, "  {:>8}  {}", row.label, row.kind);
    }
    out.trim_end().to_string()
}

fn outcome(currency: &Currency, amount: u64, outcome: &ChangeOutcome) -> String {
    match outcome {
        ChangeOutcome::Exact => "Exact amount! No change needed.".to_string(),
        ChangeOutcome::Infeasible { amount } => format!(
            "Cannot make exact change for {} with available denominations",
            currency.format_amount(*amount)
        ),
        ChangeOutcome::Breakdown { entries } => {
            let mut out = format!(
                "Change: {} ({} pieces)\n",
                currency.format_amount(amount),
                outcome.piece_count()
            );
            for entry in entries {
                let _ = writeln!(
                    out,
                    "  {:>8} × {:<4} {}",
                    currency.denomination_label(entry.value),
                    entry.count,
                    entry.kind
                );
            }
            out.trim_end().to_string()
        }
    }
}

fn amount_or_raw(currency: &Currency, amount: Option<u64>) -> String {
    amount.map_or_else(|| "-".to_string(), |a| currency.format_amount(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{solve, Money, Register};

    #[test]
    fn test_render_breakdown() {
        let usd = Currency::usd();
        let response = BreakdownResponse {
            currency: "USD".into(),
            amount: 1786,
            outcome: solve(1786, usd.denominations()).unwrap(),
        };
        let text = breakdown(&usd, &response);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Change: $17.86 (9 pieces)");
        assert!(lines[1].contains("$10") && lines[1].contains("× 1") && lines[1].ends_with("bill"));
        assert!(lines[4].contains("25¢") && lines[4].contains("× 3"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_exact_receipt() {
        let inr = Currency::inr();
        let mut register = Register::new(inr.clone());
        let r = register.tender(Money::from_minor(40), Money::from_minor(40)).unwrap();
        let text = receipt(&inr, &r);
        assert!(text.starts_with("Transaction #1\nPrice: ₹40   Paid: ₹40\n"));
        assert!(text.ends_with("No change needed."));
    }

    #[test]
    fn test_render_infeasible() {
        let text = outcome(&Currency::inr(), 3, &ChangeOutcome::Infeasible { amount: 3 });
        assert!(text.contains("₹3"));
    }
}
