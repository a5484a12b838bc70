//! # Change Command
//!
//! The original form's flow: price and payment in, change breakdown out.

use tally_core::{ChangeReceipt, Register};
use tracing::{debug, info};

use super::parse_money;
use crate::cli::ChangeArgs;
use crate::error::AppError;

/// Tenders one sale on the register.
pub fn change(register: &mut Register, args: &ChangeArgs) -> Result<ChangeReceipt, AppError> {
    debug!(price = %args.price, paid = %args.paid, "change command");

    let price = parse_money(register.currency(), "price", &args.price)?;
    let paid = parse_money(register.currency(), "paid", &args.paid)?;

    let receipt = register.tender(price, paid)?;

    info!(
        receipt_id = %receipt.id,
        transaction = receipt.transaction,
        currency = %receipt.currency,
        change = receipt.change,
        pieces = receipt.outcome.piece_count(),
        "change calculated"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tally_core::{ChangeOutcome, Currency};

    fn args(price: &str, paid: &str) -> ChangeArgs {
        ChangeArgs {
            price: price.to_string(),
            paid: paid.to_string(),
        }
    }

    #[test]
    fn test_change_usd() {
        let mut register = Register::new(Currency::usd());
        let receipt = change(&mut register, &args("2.14", "20")).unwrap();
        assert_eq!(receipt.change, 1786);
        assert_eq!(receipt.outcome.piece_count(), 9);
    }

    #[test]
    fn test_change_exact() {
        let mut register = Register::new(Currency::inr());
        let receipt = change(&mut register, &args("50", "50")).unwrap();
        assert_eq!(receipt.outcome, ChangeOutcome::Exact);
        assert_eq!(receipt.transaction, 1);
        assert_eq!(register.completed(), 1);
    }

    #[test]
    fn test_change_errors() {
        let mut register = Register::new(Currency::inr());

        let err = change(&mut register, &args("abc", "50")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("price"));

        let err = change(&mut register, &args("60", "50")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPayment);

        let err = change(&mut register, &args("0", "2000000")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AmountTooLarge);

        assert_eq!(register.completed(), 0);
    }
}
