//! # Register
//!
//! The cash-register flow around the solver: take a price and a payment,
//! work out the change, and keep a running count of completed transactions.
//!
//! ## Tender Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tender(price, paid)                                                    │
//! │       │                                                                 │
//! │       ├── price or paid negative  → ValidationError                    │
//! │       ├── paid < price            → InsufficientPayment                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change = paid - price ──► solve_bounded(change, set, max_change)      │
//! │       │                                                                 │
//! │       ├── Exact       → receipt, completed += 1   "No change needed"   │
//! │       ├── Breakdown   → receipt, completed += 1                        │
//! │       └── Infeasible  → ExactChangeUnavailable (not counted)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Register` is owned by its caller and holds no shared state; two
//! registers never affect each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::change::{solve_bounded, ChangeOutcome};
use crate::currency::Currency;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_non_negative;
use crate::MAX_CHANGE_AMOUNT;

// =============================================================================
// Change Receipt
// =============================================================================

/// Record of one completed transaction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeReceipt {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// 1-based position of this transaction on its register.
    pub transaction: u64,

    /// Currency code the amounts are in.
    pub currency: String,

    /// Item price in base units.
    pub price: Money,

    /// Amount handed over in base units.
    pub paid: Money,

    /// `paid - price` in base units.
    pub change: u64,

    /// How the change is made up.
    pub outcome: ChangeOutcome,

    /// When the transaction completed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Register
// =============================================================================

/// A till loaded with one currency's denominations.
#[derive(Debug, Clone)]
pub struct Register {
    currency: Currency,
    max_change: u64,
    completed: u64,
}

impl Register {
    /// Creates a register with the crate-wide change ceiling.
    pub fn new(currency: Currency) -> Self {
        Self::with_max_change(currency, MAX_CHANGE_AMOUNT)
    }

    /// Creates a register with a custom change ceiling (base units).
    pub fn with_max_change(currency: Currency, max_change: u64) -> Self {
        Register {
            currency,
            max_change,
            completed: 0,
        }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn max_change(&self) -> u64 {
        self.max_change
    }

    /// Number of transactions completed since the register was created.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Works out the change for one sale.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{ChangeOutcome, Currency, Money, Register};
    ///
    /// let mut register = Register::new(Currency::inr());
    ///
    /// let receipt = register.tender(Money::from_minor(42), Money::from_minor(50)).unwrap();
    /// assert_eq!(receipt.change, 8);
    /// assert_eq!(receipt.outcome.piece_count(), 3);
    ///
    /// let receipt = register.tender(Money::from_minor(50), Money::from_minor(50)).unwrap();
    /// assert_eq!(receipt.outcome, ChangeOutcome::Exact);
    /// assert_eq!(receipt.transaction, 2);
    ///
    /// assert_eq!(register.completed(), 2);
    /// ```
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for negative price or payment
    /// - [`CoreError::InsufficientPayment`] when `paid < price`
    /// - [`CoreError::AmountTooLarge`] when the change exceeds the ceiling
    /// - [`CoreError::ExactChangeUnavailable`] when the set cannot make it
    pub fn tender(&mut self, price: Money, paid: Money) -> CoreResult<ChangeReceipt> {
        validate_non_negative("price", price)?;
        validate_non_negative("paid", paid)?;

        if paid < price {
            return Err(CoreError::InsufficientPayment { price, paid });
        }

        // Both operands are non-negative and paid >= price, so this cannot
        // underflow and the result is non-negative.
        let change = (paid - price).to_amount().unwrap_or_default();

        let outcome = solve_bounded(change, self.currency.denominations(), self.max_change)?;
        if let ChangeOutcome::Infeasible { amount } = outcome {
            return Err(CoreError::ExactChangeUnavailable { amount });
        }

        self.completed += 1;

        Ok(ChangeReceipt {
            id: Uuid::new_v4().to_string(),
            transaction: self.completed,
            currency: self.currency.code().to_string(),
            price,
            paid,
            change,
            outcome,
            created_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
