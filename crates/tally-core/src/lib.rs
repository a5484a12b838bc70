//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It works out how to hand back change
//! with the fewest possible coins and bills, and contains no I/O at all.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (tally CLI)                        │   │
//! │  │    Price/Paid entry ──► parse ──► tender ──► render breakdown   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  change   │  │ currency  │  │ register  │  │ validation│  │   │
//! │  │   │  solve()  │  │ Currency  │  │ Register  │  │   rules   │  │   │
//! │  │   │  Outcome  │  │ DenomSet  │  │ Receipt   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`change`] - The minimum-piece change solver
//! - [`currency`] - Denominations, currency presets, amount parsing and formatting
//! - [`money`] - Signed money type for price/paid arithmetic
//! - [`register`] - One-transaction-at-a-time cash register flow
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, including tie-breaks
//! 2. **Integer Money**: all amounts are in base units (cents, paise, rupees)
//! 3. **Explicit Outcomes**: zero change and impossible change are different variants
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::change::{solve, ChangeOutcome};
//! use tally_core::currency::Currency;
//!
//! let usd = Currency::usd();
//! let outcome = solve(1786, usd.denominations()).unwrap();
//!
//! assert_eq!(outcome.piece_count(), 9);
//! assert_eq!(outcome.total(), 1786);
//! assert!(matches!(outcome, ChangeOutcome::Breakdown { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod currency;
pub mod error;
pub mod money;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{solve, solve_bounded, BreakdownEntry, ChangeOutcome};
pub use currency::{Currency, Denomination, DenominationKind, DenominationSet};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use register::{ChangeReceipt, Register};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest amount (in base units) the solver will build a table for.
///
/// ## Business Reason
/// The solver allocates one table slot per base unit of change. A register
/// never hands back more than this, and the cap keeps a mistyped amount
/// from allocating gigabytes. Front ends may configure a lower ceiling via
/// [`solve_bounded`].
pub const MAX_CHANGE_AMOUNT: u64 = 1_000_000;

/// Maximum length of a user-entered amount string.
pub const MAX_AMOUNT_INPUT_LEN: usize = 32;
