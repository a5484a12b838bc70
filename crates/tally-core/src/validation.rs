//! # Validation Module
//!
//! Input validation utilities for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI argument parsing)                             │
//! │  └── Arguments present, flags well-formed                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Amount text shape and length                                      │
//! │  ├── Non-negative prices/payments                                      │
//! │  ├── Denomination values and currency codes (config data)              │
//! │  └── Solver ceiling                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Register (paid >= price) and solver (feasibility)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_amount_input, validate_denomination_value};
//!
//! assert!(validate_amount_input("price", "12.50").is_ok());
//! assert!(validate_denomination_value(0).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_AMOUNT_INPUT_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates raw amount text before parsing.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_AMOUNT_INPUT_LEN`] characters
pub fn validate_amount_input(field: &str, text: &str) -> ValidationResult<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.chars().count() > MAX_AMOUNT_INPUT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_AMOUNT_INPUT_LEN,
        });
    }

    Ok(())
}

/// Validates a currency code.
///
/// ## Rules
/// - Exactly three ASCII letters (case-insensitive, "usd" is fine)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("INR").is_ok());
/// assert!(validate_currency_code("rupee").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency code".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency code".to_string(),
            reason: "must be three letters, e.g. USD".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a denomination face value.
///
/// ## Rules
/// - Must be positive (> 0); a zero coin would loop the solver forever
pub fn validate_denomination_value(value: u64) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: "denomination value".to_string(),
        });
    }

    Ok(())
}

/// Validates that a price or payment is not negative.
///
/// Zero is allowed (a free item, or nothing paid yet).
pub fn validate_non_negative(field: &str, money: Money) -> ValidationResult<()> {
    if money.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a change amount against the solver ceiling.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Price: 1.00   Paid: 50000.00  (typo: meant 50.00)                      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_change_amount(4_999_900, 1_000_000) ← THIS FUNCTION           │
/// │       │                                                                 │
/// │       ├── too large → Error: "Change amount ... exceeds the maximum"   │
/// │       │                                                                 │
/// │       └── OK → solver allocates its table                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_change_amount(amount: u64, max: u64) -> CoreResult<()> {
    if amount > max {
        return Err(CoreError::AmountTooLarge { amount, max });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
