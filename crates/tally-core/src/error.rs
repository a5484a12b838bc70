//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Register and solver failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-cli errors (app)                                                │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal / JSON        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not an Error
//! Zero change is a success (`ChangeOutcome::Exact`). An amount the
//! denominations cannot reach is a *solver outcome* (`ChangeOutcome::Infeasible`);
//! only the register turns it into [`CoreError::ExactChangeUnavailable`].

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal. Every one of them is recovered from by asking
/// the user for different input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer handed over less than the price.
    ///
    /// ## User Workflow
    /// ```text
    /// Price: 150   Paid: 100
    ///      │
    ///      ▼
    /// InsufficientPayment { price: 150, paid: 100 }
    ///      │
    ///      ▼
    /// UI shows: "Amount paid must be greater than or equal to the price"
    /// ```
    #[error("Amount paid ({}) is less than the price ({})", .paid.minor_units(), .price.minor_units())]
    InsufficientPayment { price: Money, paid: Money },

    /// The configured denominations cannot sum to the change amount.
    ///
    /// ## When This Occurs
    /// - A set without a unit coin, e.g. {5, 2} asked for 3
    #[error("Cannot make exact change for {amount} with the available denominations")]
    ExactChangeUnavailable { amount: u64 },

    /// Change amount exceeds the solver ceiling.
    #[error("Change amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge { amount: u64, max: u64 },

    /// A denomination set was built with no denominations.
    #[error("Denomination set must contain at least one denomination")]
    EmptyDenominationSet,

    /// No preset or configured currency has this code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input or configuration data doesn't meet
/// requirements. Used for early validation before the solver runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., "12.3.4" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two currencies with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
