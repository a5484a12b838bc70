//! # Commands Module
//!
//! One function per subcommand. Each takes already-loaded state, calls
//! into tally-core and returns a serializable response; rendering happens
//! in [`crate::render`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (exports)
//! ├── change.rs         ◄─── price + paid → receipt
//! ├── breakdown.rs      ◄─── amount → breakdown
//! └── denominations.rs  ◄─── list the active set
//! ```

pub mod breakdown;
pub mod change;
pub mod denominations;

use tally_core::{Currency, Money};

use crate::error::AppError;

/// Parses a cashier-entered amount into `Money` for the given currency.
pub(crate) fn parse_money(currency: &Currency, field: &str, text: &str) -> Result<Money, AppError> {
    let units = currency.parse_amount_field(field, text).map_err(tally_core::CoreError::from)?;
    Money::from_amount(units).ok_or_else(|| AppError::validation(format!("{field} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_money() {
        let usd = Currency::usd();
        assert_eq!(parse_money(&usd, "price", "2.14").unwrap(), Money::from_minor(214));

        let err = parse_money(&usd, "price", "abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_parse_money_beyond_i64() {
        // Parses as u64 but does not fit in Money
        let inr = Currency::inr();
        let text = (i64::MAX as u64 + 1).to_string();
        assert_eq!(inr.parse_amount(&text).unwrap(), i64::MAX as u64 + 1);

        let err = parse_money(&inr, "paid", &text).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "paid is too large");

        let max = i64::MAX.to_string();
        assert_eq!(parse_money(&inr, "paid", &max).unwrap(), Money::from_minor(i64::MAX));
    }
}
