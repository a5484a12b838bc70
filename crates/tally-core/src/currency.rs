//! # Currency & Denominations
//!
//! Denomination sets, currency presets, and conversion between what the
//! cashier types ("17.86") and the integer base units the solver works in.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Currency Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Currency     │   │ DenominationSet │   │  Denomination   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code  "USD"    │──►│  ordered        │──►│  value (u64)    │       │
//! │  │  symbol "$"     │   │  non-empty      │   │  kind           │       │
//! │  │  minor_digits 2 │   │  deduplicated   │   │  label          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Base Units
//! `minor_digits` is how many decimal places separate the display amount
//! from the base unit:
//!
//! | Preset | minor_digits | Display | Base units |
//! |--------|--------------|---------|------------|
//! | INR    | 0            | ₹1786   | 1786       |
//! | USD    | 2            | $17.86  | 1786       |
//!
//! The order of a set matters: the solver breaks ties in favour of the
//! denomination listed first.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_amount_input, validate_denomination_value};

/// Largest supported `minor_digits`; 10^18 still fits in a u64.
pub const MAX_MINOR_DIGITS: u8 = 18;

// =============================================================================
// Denomination
// =============================================================================

/// Physical form of a denomination. Display only; the solver ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DenominationKind {
    Coin,
    Bill,
}

impl std::fmt::Display for DenominationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenominationKind::Coin => write!(f, "coin"),
            DenominationKind::Bill => write!(f, "bill"),
        }
    }
}

/// A face value that can be handed back as change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Denomination {
    /// Face value in base units (always > 0 once inside a set).
    pub value: u64,

    /// Coin or bill.
    pub kind: DenominationKind,

    /// Display label, e.g. "₹10" or "25¢".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub label: Option<String>,
}

impl Denomination {
    /// Creates a coin with no custom label.
    pub fn coin(value: u64) -> Self {
        Denomination {
            value,
            kind: DenominationKind::Coin,
            label: None,
        }
    }

    /// Creates a bill with no custom label.
    pub fn bill(value: u64) -> Self {
        Denomination {
            value,
            kind: DenominationKind::Bill,
            label: None,
        }
    }

    /// Attaches a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// =============================================================================
// Denomination Set
// =============================================================================

/// A fixed, ordered, validated list of denominations.
///
/// ## Construction Rules
/// - At least one denomination
/// - Every value > 0
/// - Repeated values are dropped, keeping the first occurrence and its
///   position. A repeat could never win a tie-break anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationSet(Vec<Denomination>);

impl DenominationSet {
    /// Validates and builds a set.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::currency::{Denomination, DenominationSet};
    ///
    /// let set = DenominationSet::new(vec![
    ///     Denomination::coin(5),
    ///     Denomination::coin(2),
    ///     Denomination::coin(5),
    /// ]).unwrap();
    /// assert_eq!(set.values(), vec![5, 2]);
    ///
    /// assert!(DenominationSet::new(vec![]).is_err());
    /// assert!(DenominationSet::new(vec![Denomination::coin(0)]).is_err());
    /// ```
    pub fn new(denominations: Vec<Denomination>) -> CoreResult<Self> {
        if denominations.is_empty() {
            return Err(CoreError::EmptyDenominationSet);
        }

        let mut unique: Vec<Denomination> = Vec::with_capacity(denominations.len());
        for denom in denominations {
            validate_denomination_value(denom.value)?;
            if !unique.iter().any(|d| d.value == denom.value) {
                unique.push(denom);
            }
        }

        Ok(DenominationSet(unique))
    }

    /// Iterates in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, Denomination> {
        self.0.iter()
    }

    /// Denominations in configured order.
    pub fn as_slice(&self) -> &[Denomination] {
        &self.0
    }

    /// Face values in configured order.
    pub fn values(&self) -> Vec<u64> {
        self.0.iter().map(|d| d.value).collect()
    }

    /// Looks up a denomination by face value.
    pub fn find(&self, value: u64) -> Option<&Denomination> {
        self.0.iter().find(|d| d.value == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds no denominations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DenominationSet {
    type Item = &'a Denomination;
    type IntoIter = std::slice::Iter<'a, Denomination>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Currency
// =============================================================================

/// A currency: display conventions plus the denominations a register holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    code: String,
    symbol: String,
    minor_digits: u8,
    denominations: DenominationSet,
}

impl Currency {
    /// Builds a currency.
    ///
    /// ## Errors
    /// - `code` must be three ASCII letters (stored upper-case)
    /// - `minor_digits` at most [`MAX_MINOR_DIGITS`]
    pub fn new(
        code: &str,
        symbol: impl Into<String>,
        minor_digits: u8,
        denominations: DenominationSet,
    ) -> CoreResult<Self> {
        crate::validation::validate_currency_code(code)?;

        if minor_digits > MAX_MINOR_DIGITS {
            return Err(ValidationError::OutOfRange {
                field: "minor_digits".to_string(),
                min: 0,
                max: i64::from(MAX_MINOR_DIGITS),
            }
            .into());
        }

        Ok(Currency {
            code: code.to_ascii_uppercase(),
            symbol: symbol.into(),
            minor_digits,
            denominations,
        })
    }

    /// Indian rupee, whole rupees as the base unit, coins ₹10, ₹5, ₹2, ₹1.
    pub fn inr() -> Self {
        let set = vec![
            Denomination::coin(10).with_label("₹10"),
            Denomination::coin(5).with_label("₹5"),
            Denomination::coin(2).with_label("₹2"),
            Denomination::coin(1).with_label("₹1"),
        ];
        Currency {
            code: "INR".to_string(),
            symbol: "₹".to_string(),
            minor_digits: 0,
            denominations: DenominationSet(set),
        }
    }

    /// US dollar in cents: $100, $50, $20, $10, $5, $1 bills and 25¢, 10¢, 5¢, 1¢ coins.
    pub fn usd() -> Self {
        let set = vec![
            Denomination::bill(10000).with_label("$100"),
            Denomination::bill(5000).with_label("$50"),
            Denomination::bill(2000).with_label("$20"),
            Denomination::bill(1000).with_label("$10"),
            Denomination::bill(500).with_label("$5"),
            Denomination::bill(100).with_label("$1"),
            Denomination::coin(25).with_label("25¢"),
            Denomination::coin(10).with_label("10¢"),
            Denomination::coin(5).with_label("5¢"),
            Denomination::coin(1).with_label("1¢"),
        ];
        Currency {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            minor_digits: 2,
            denominations: DenominationSet(set),
        }
    }

    /// Built-in presets.
    pub fn presets() -> Vec<Currency> {
        vec![Currency::inr(), Currency::usd()]
    }

    /// Looks up a built-in preset by code (case-insensitive).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::currency::Currency;
    ///
    /// assert_eq!(Currency::preset("usd").unwrap().code(), "USD");
    /// assert!(Currency::preset("XYZ").is_err());
    /// ```
    pub fn preset(code: &str) -> CoreResult<Currency> {
        Currency::presets()
            .into_iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn minor_digits(&self) -> u8 {
        self.minor_digits
    }

    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Number of base units in one display unit (10^minor_digits).
    fn scale(&self) -> u64 {
        10u64.pow(u32::from(self.minor_digits))
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Formats base units for display.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::currency::Currency;
    ///
    /// assert_eq!(Currency::inr().format_amount(1786), "₹1786");
    /// assert_eq!(Currency::usd().format_amount(1786), "$17.86");
    /// assert_eq!(Currency::usd().format_amount(5), "$0.05");
    /// ```
    pub fn format_amount(&self, amount: u64) -> String {
        if self.minor_digits == 0 {
            return format!("{}{}", self.symbol, amount);
        }
        let scale = self.scale();
        format!(
            "{}{}.{:0width$}",
            self.symbol,
            amount / scale,
            amount % scale,
            width = usize::from(self.minor_digits)
        )
    }

    /// Label for a face value: the configured label, else the formatted amount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::currency::Currency;
    ///
    /// let usd = Currency::usd();
    /// assert_eq!(usd.denomination_label(25), "25¢");
    /// assert_eq!(usd.denomination_label(200), "$2.00");
    /// ```
    pub fn denomination_label(&self, value: u64) -> String {
        self.denominations
            .find(value)
            .and_then(|d| d.label.clone())
            .unwrap_or_else(|| self.format_amount(value))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses text produced by [`Currency::format_amount`] back to base units.
    ///
    /// Accepts an optional leading currency symbol, so
    /// `parse_display(format_amount(n)) == n` for every `n`.
    pub fn parse_display(&self, text: &str) -> Result<u64, ValidationError> {
        let trimmed = text.trim();
        let body = trimmed.strip_prefix(self.symbol.as_str()).unwrap_or(trimmed);
        self.parse_amount_field("amount", body)
    }

    /// Parses a cashier-entered decimal into base units.
    ///
    /// ## Rules
    /// - Digits with at most one `.`; at least one digit overall
    /// - No sign, no thousands separators
    /// - Extra fractional digits round to the nearest base unit (half up)
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::currency::Currency;
    ///
    /// let usd = Currency::usd();
    /// assert_eq!(usd.parse_amount("17.86").unwrap(), 1786);
    /// assert_eq!(usd.parse_amount("17.855").unwrap(), 1786);
    /// assert_eq!(usd.parse_amount("20").unwrap(), 2000);
    ///
    /// let inr = Currency::inr();
    /// assert_eq!(inr.parse_amount("99.5").unwrap(), 100);
    /// assert!(inr.parse_amount("-5").is_err());
    /// ```
    pub fn parse_amount(&self, text: &str) -> Result<u64, ValidationError> {
        self.parse_amount_field("amount", text)
    }

    /// [`Currency::parse_amount`] with a field name for error messages.
    pub fn parse_amount_field(&self, field: &str, text: &str) -> Result<u64, ValidationError> {
        validate_amount_input(field, text)?;
        let text = text.trim();

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        };
        let too_large = || invalid("exceeds the largest supported amount");

        let (whole, fraction) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain at least one digit"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must be a non-negative decimal number"));
        }

        let digits = usize::from(self.minor_digits);
        let (kept, dropped) = if fraction.len() > digits {
            fraction.split_at(digits)
        } else {
            (fraction, "")
        };

        let mut units: u64 = 0;
        let push = |acc: u64, b: u8| {
            acc.checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
        };
        for b in whole.bytes() {
            units = push(units, b).ok_or_else(too_large)?;
        }
        for b in kept.bytes() {
            units = push(units, b).ok_or_else(too_large)?;
        }
        for _ in kept.len()..digits {
            units = units.checked_mul(10).ok_or_else(too_large)?;
        }

        if dropped.as_bytes().first().is_some_and(|&b| b >= b'5') {
            units = units.checked_add(1).ok_or_else(too_large)?;
        }

        Ok(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_empty_and_zero() {
        assert!(matches!(
            DenominationSet::new(vec![]),
            Err(CoreError::EmptyDenominationSet)
        ));
        assert!(matches!(
            DenominationSet::new(vec![Denomination::coin(5), Denomination::coin(0)]),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_set_dedup_keeps_first() {
        let set = DenominationSet::new(vec![
            Denomination::coin(2).with_label("first"),
            Denomination::coin(1),
            Denomination::bill(2).with_label("second"),
        ])
        .unwrap();
        assert_eq!(set.values(), vec![2, 1]);
        assert_eq!(set.find(2).unwrap().label.as_deref(), Some("first"));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_presets() {
        let inr = Currency::inr();
        assert_eq!(inr.code(), "INR");
        assert_eq!(inr.denominations().values(), vec![10, 5, 2, 1]);
        assert!(inr
            .denominations()
            .iter()
            .all(|d| d.kind == DenominationKind::Coin));

        let usd = Currency::usd();
        assert_eq!(
            usd.denominations().values(),
            vec![10000, 5000, 2000, 1000, 500, 100, 25, 10, 5, 1]
        );
        assert_eq!(usd.minor_digits(), 2);

        assert_eq!(Currency::preset(" inr ").unwrap().code(), "INR");
        assert!(matches!(
            Currency::preset("EUR"),
            Err(CoreError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_custom_currency_validation() {
        let set = DenominationSet::new(vec![Denomination::coin(1)]).unwrap();
        let eur = Currency::new("eur", "€", 2, set.clone()).unwrap();
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.symbol(), "€");

        assert!(Currency::new("EURO", "€", 2, set.clone()).is_err());
        assert!(Currency::new("EUR", "€", 19, set).is_err());
    }

    #[test]
    fn test_format_amount() {
        let inr = Currency::inr();
        assert_eq!(inr.format_amount(0), "₹0");
        assert_eq!(inr.format_amount(1786), "₹1786");

        let usd = Currency::usd();
        assert_eq!(usd.format_amount(0), "$0.00");
        assert_eq!(usd.format_amount(7), "$0.07");
        assert_eq!(usd.format_amount(1000), "$10.00");
        assert_eq!(usd.format_amount(123456789), "$1234567.89");
    }

    #[test]
    fn test_denomination_labels() {
        let inr = Currency::inr();
        assert_eq!(inr.denomination_label(10), "₹10");
        assert_eq!(inr.denomination_label(500), "₹500");

        let usd = Currency::usd();
        assert_eq!(usd.denomination_label(10000), "$100");
        assert_eq!(usd.denomination_label(1), "1¢");
    }

    #[test]
    fn test_label_is_optional_in_typescript() {
        let decl = Denomination::decl();
        assert!(decl.contains("label?: string"), "{decl}");
        assert!(!decl.contains("string | null"), "{decl}");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let three = Currency::new(
            "KWD",
            "KD ",
            3,
            DenominationSet::new(vec![Denomination::coin(5)]).unwrap(),
        )
        .unwrap();

        let samples = (0..=2_000u64)
            .chain([9_999, 10_000, 123_456_789, 1_000_000_000_007])
            .chain([i64::MAX as u64, i64::MAX as u64 + 1, u64::MAX - 1, u64::MAX]);
        for n in samples {
            for currency in [Currency::inr(), Currency::usd(), three.clone()] {
                let shown = currency.format_amount(n);
                assert_eq!(currency.parse_display(&shown).unwrap(), n, "{shown}");
            }
        }
    }

    #[test]
    fn test_parse_amount_accepts() {
        let usd = Currency::usd();
        assert_eq!(usd.parse_amount("0").unwrap(), 0);
        assert_eq!(usd.parse_amount("  12.5 ").unwrap(), 1250);
        assert_eq!(usd.parse_amount(".5").unwrap(), 50);
        assert_eq!(usd.parse_amount("3.").unwrap(), 300);
        assert_eq!(usd.parse_amount("007.01").unwrap(), 701);
    }

    #[test]
    fn test_parse_amount_rounds_to_nearest() {
        let usd = Currency::usd();
        assert_eq!(usd.parse_amount("0.004").unwrap(), 0);
        assert_eq!(usd.parse_amount("0.005").unwrap(), 1);
        assert_eq!(usd.parse_amount("1.999").unwrap(), 200);

        let inr = Currency::inr();
        assert_eq!(inr.parse_amount("12.49").unwrap(), 12);
        assert_eq!(inr.parse_amount("12.5").unwrap(), 13);
    }

    #[test]
    fn test_parse_amount_rejects() {
        let usd = Currency::usd();
        for bad in ["", "   ", ".", "-1", "+1", "1.2.3", "1,000", "abc", "1e3", "$5"] {
            assert!(usd.parse_amount(bad).is_err(), "{bad:?} should be rejected");
        }
        assert!(matches!(
            usd.parse_amount("99999999999999999999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        // u64::MAX is 184467440737095516.15 in cents; one more cent overflows
        assert_eq!(usd.parse_amount("184467440737095516.15").unwrap(), u64::MAX);
        assert!(usd.parse_amount("184467440737095516.16").is_err());
        assert!(usd.parse_amount("184467440737095516.155").is_err());
    }

    #[test]
    fn test_parse_display_strips_symbol() {
        let usd = Currency::usd();
        assert_eq!(usd.parse_display("$17.86").unwrap(), 1786);
        assert_eq!(usd.parse_display("17.86").unwrap(), 1786);
        assert!(usd.parse_display("₹17").is_err());
    }
}
