//! # Change Solver
//!
//! Finds the breakdown of an amount into the fewest coins and bills.
//!
//! ## Why Not Greedy?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Greedy (largest coin first) is only optimal for "canonical" sets.     │
//! │                                                                         │
//! │  Denominations {4, 3, 1}, amount 6:                                    │
//! │    Greedy:  4 + 1 + 1  = 3 pieces  ❌                                  │
//! │    Optimal: 3 + 3      = 2 pieces  ✅                                  │
//! │                                                                         │
//! │  Sets are configuration data, so we can't assume they're canonical.   │
//! │  Bottom-up dynamic programming is optimal for ANY set.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm
//! ```text
//! min_pieces[i] = fewest pieces summing to i      (∞ if unreachable)
//! chosen[i]     = index of the denomination used last to reach i
//!
//! for i in 1..=amount
//!     for (j, d) in denominations          ← configured order
//!         if d <= i && min_pieces[i-d] + 1 < min_pieces[i]   ← strict <
//!             min_pieces[i] = min_pieces[i-d] + 1
//!             chosen[i] = j
//!
//! walk chosen[] back from amount → counts per value → sort descending
//! ```
//!
//! The strict `<` means the FIRST denomination in configured order that
//! reaches the minimum wins, and a later equally good one never replaces it.
//! The same set in the same order always yields the same breakdown.
//!
//! Cost: O(amount × denominations) time, O(amount) space. Amounts are
//! capped (see [`crate::MAX_CHANGE_AMOUNT`]) before the tables are allocated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{DenominationKind, DenominationSet};
use crate::error::{CoreError, CoreResult};
use crate::validation::validate_change_amount;
use crate::MAX_CHANGE_AMOUNT;

// =============================================================================
// Breakdown Entry
// =============================================================================

/// One line of a change breakdown: `count` pieces of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BreakdownEntry {
    /// Denomination value in base units.
    pub value: u64,

    /// Number of pieces (always > 0).
    pub count: u64,

    /// Coin or bill, copied from the denomination for display.
    pub kind: DenominationKind,
}

impl BreakdownEntry {
    /// Value contributed by this line (`value × count`).
    #[inline]
    pub const fn subtotal(&self) -> u64 {
        self.value * self.count
    }
}

// =============================================================================
// Change Outcome
// =============================================================================

/// Result of a solve.
///
/// ## Three Distinct Cases
/// ```text
/// amount == 0                     → Exact          "No change needed"
/// amount > 0, reachable           → Breakdown      entries, value descending
/// amount > 0, unreachable         → Infeasible     "Cannot make exact change"
/// ```
/// An empty breakdown never stands in for "impossible".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ChangeOutcome {
    /// Nothing to hand back.
    Exact,

    /// Optimal breakdown, sorted by value descending.
    Breakdown { entries: Vec<BreakdownEntry> },

    /// No combination of the denominations sums to `amount`.
    Infeasible { amount: u64 },
}

impl ChangeOutcome {
    /// Breakdown lines (empty for `Exact` and `Infeasible`).
    pub fn entries(&self) -> &[BreakdownEntry] {
        match self {
            ChangeOutcome::Breakdown { entries } => entries,
            ChangeOutcome::Exact | ChangeOutcome::Infeasible { .. } => &[],
        }
    }

    /// Total number of coins and bills handed back.
    pub fn piece_count(&self) -> u64 {
        self.entries().iter().map(|e| e.count).sum()
    }

    /// Total value handed back.
    pub fn total(&self) -> u64 {
        self.entries().iter().map(BreakdownEntry::subtotal).sum()
    }

    /// True when the transaction can complete (`Exact` or `Breakdown`).
    pub fn is_settled(&self) -> bool {
        !matches!(self, ChangeOutcome::Infeasible { .. })
    }
}

// =============================================================================
// Solver
// =============================================================================

/// Solves with the crate-wide ceiling [`MAX_CHANGE_AMOUNT`].
///
/// ## Example
/// ```rust
/// use tally_core::change::{solve, ChangeOutcome};
/// use tally_core::currency::Currency;
///
/// let inr = Currency::inr(); // coins 10, 5, 2, 1
/// let outcome = solve(8, inr.denominations()).unwrap();
///
/// let values: Vec<(u64, u64)> = outcome.entries().iter().map(|e| (e.value, e.count)).collect();
/// assert_eq!(values, vec![(5, 1), (2, 1), (1, 1)]);
///
/// assert_eq!(solve(0, inr.denominations()).unwrap(), ChangeOutcome::Exact);
/// ```
pub fn solve(amount: u64, denominations: &DenominationSet) -> CoreResult<ChangeOutcome> {
    solve_bounded(amount, denominations, MAX_CHANGE_AMOUNT)
}

/// Solves with an explicit ceiling on `amount`.
///
/// ## Errors
/// [`crate::CoreError::AmountTooLarge`] when `amount > max_amount`. This is
/// the only failure; infeasibility is an [`ChangeOutcome::Infeasible`] value.
pub fn solve_bounded(
    amount: u64,
    denominations: &DenominationSet,
    max_amount: u64,
) -> CoreResult<ChangeOutcome> {
    if amount == 0 {
        return Ok(ChangeOutcome::Exact);
    }

    validate_change_amount(amount, max_amount)?;

    let target = usize::try_from(amount).map_err(|_| CoreError::AmountTooLarge {
        amount,
        max: usize::MAX as u64,
    })?;
    let table = fill_table(target, denominations);

    if table.min_pieces[target] == UNREACHABLE {
        return Ok(ChangeOutcome::Infeasible { amount });
    }

    Ok(ChangeOutcome::Breakdown {
        entries: reconstruct(target, &table, denominations),
    })
}

const UNREACHABLE: u32 = u32::MAX;

struct Table {
    min_pieces: Vec<u32>,
    chosen: Vec<Option<usize>>,
}

fn fill_table(target: usize, denominations: &DenominationSet) -> Table {
    let mut min_pieces = vec![UNREACHABLE; target + 1];
    let mut chosen = vec![None; target + 1];
    min_pieces[0] = 0;

    for i in 1..=target {
        for (j, denom) in denominations.iter().enumerate() {
            if denom.value > i as u64 {
                continue;
            }
            let d = denom.value as usize;
            let prev = min_pieces[i - d];
            if prev != UNREACHABLE && prev + 1 < min_pieces[i] {
                min_pieces[i] = prev + 1;
                chosen[i] = Some(j);
            }
        }
    }

    Table { min_pieces, chosen }
}

fn reconstruct(target: usize, table: &Table, denominations: &DenominationSet) -> Vec<BreakdownEntry> {
    let mut counts: BTreeMap<u64, (u64, DenominationKind)> = BTreeMap::new();
    let mut current = target;

    while current > 0 {
        let Some(index) = table.chosen[current] else {
            break;
        };
        let denom = &denominations.as_slice()[index];
        counts
            .entry(denom.value)
            .or_insert((0, denom.kind))
            .0 += 1;
        current -= denom.value as usize;
    }

    counts
        .into_iter()
        .rev()
        .map(|(value, (count, kind))| BreakdownEntry { value, count, kind })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Currency, Denomination};

    fn coins(values: &[u64]) -> DenominationSet {
        DenominationSet::new(values.iter().map(|&v| Denomination::coin(v)).collect()).unwrap()
    }

    fn pairs(outcome: &ChangeOutcome) -> Vec<(u64, u64)> {
        outcome.entries().iter().map(|e| (e.value, e.count)).collect()
    }

    /// Fewest pieces by exhaustive search, for cross-checking small amounts.
    fn brute_force_min(amount: u64, values: &[u64]) -> Option<u64> {
        fn go(remaining: u64, values: &[u64]) -> Option<u64> {
            if remaining == 0 {
                return Some(0);
            }
            let (&first, rest) = values.split_first()?;
            let mut best: Option<u64> = None;
            for k in 0..=remaining / first {
                if let Some(n) = go(remaining - k * first, rest) {
                    let total = n + k;
                    best = Some(best.map_or(total, |b| b.min(total)));
                }
            }
            best
        }
        go(amount, values)
    }

    #[test]
    fn test_zero_amount_is_exact() {
        let set = coins(&[10, 5, 2, 1]);
        let outcome = solve(0, &set).unwrap();
        assert_eq!(outcome, ChangeOutcome::Exact);
        assert!(outcome.entries().is_empty());
        assert!(outcome.is_settled());
    }

    #[test]
    fn test_rupee_coins_eight() {
        let set = coins(&[10, 5, 2, 1]);
        let outcome = solve(8, &set).unwrap();
        assert_eq!(pairs(&outcome), vec![(5, 1), (2, 1), (1, 1)]);
        assert_eq!(outcome.piece_count(), 3);
    }

    #[test]
    fn test_usd_1786() {
        let usd = Currency::usd();
        let outcome = solve(1786, usd.denominations()).unwrap();
        assert_eq!(
            pairs(&outcome),
            vec![(1000, 1), (500, 1), (100, 2), (25, 3), (10, 1), (1, 1)]
        );
        assert_eq!(outcome.piece_count(), 9);
        assert_eq!(outcome.total(), 1786);

        let kinds: Vec<DenominationKind> = outcome.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds[0], DenominationKind::Bill);
        assert_eq!(kinds[3], DenominationKind::Coin);
    }

    #[test]
    fn test_infeasible_without_unit_coin() {
        let set = coins(&[5, 2]);
        let outcome = solve(3, &set).unwrap();
        assert_eq!(outcome, ChangeOutcome::Infeasible { amount: 3 });
        assert!(outcome.entries().is_empty());
        assert!(!outcome.is_settled());

        // Same set can still reach other amounts
        assert_eq!(pairs(&solve(9, &set).unwrap()), vec![(5, 1), (2, 2)]);
        assert_eq!(solve(1, &set).unwrap(), ChangeOutcome::Infeasible { amount: 1 });
    }

    #[test]
    fn test_beats_greedy_on_non_canonical_set() {
        let set = coins(&[4, 3, 1]);
        let outcome = solve(6, &set).unwrap();
        assert_eq!(pairs(&outcome), vec![(3, 2)]);
    }

    #[test]
    fn test_four_three_six() {
        let set = coins(&[4, 3]);
        let first = solve(6, &set).unwrap();
        assert_eq!(pairs(&first), vec![(3, 2)]);
        for _ in 0..10 {
            assert_eq!(solve(6, &set).unwrap(), first);
        }
    }

    #[test]
    fn test_tie_break_first_in_order_wins() {
        // 4 = 3 + 1 = 2 + 2, both two pieces
        let three_first = coins(&[3, 2, 1]);
        assert_eq!(pairs(&solve(4, &three_first).unwrap()), vec![(3, 1), (1, 1)]);

        let two_first = coins(&[2, 3, 1]);
        assert_eq!(pairs(&solve(4, &two_first).unwrap()), vec![(2, 2)]);
    }

    #[test]
    fn test_sum_and_optimality_against_brute_force() {
        let sets: [&[u64]; 4] = [&[10, 5, 2, 1], &[4, 3, 1], &[7, 5, 2], &[25, 10, 1]];
        for values in sets {
            let set = coins(values);
            for amount in 0..=60 {
                let outcome = solve(amount, &set).unwrap();
                match brute_force_min(amount, values) {
                    Some(best) => {
                        assert!(outcome.is_settled(), "{values:?} amount {amount}");
                        assert_eq!(outcome.total(), amount, "{values:?} amount {amount}");
                        assert_eq!(outcome.piece_count(), best, "{values:?} amount {amount}");
                    }
                    None => {
                        assert_eq!(outcome, ChangeOutcome::Infeasible { amount });
                    }
                }
            }
        }
    }

    #[test]
    fn test_entries_sorted_descending_and_unique() {
        let set = coins(&[1, 2, 5, 10]);
        let outcome = solve(38, &set).unwrap();
        let values: Vec<u64> = outcome.entries().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![10, 5, 2, 1]);
        assert!(outcome.entries().iter().all(|e| e.count > 0));
        assert_eq!(outcome.total(), 38);
    }

    #[test]
    fn test_amount_ceiling() {
        let set = coins(&[1]);
        let err = solve_bounded(101, &set, 100).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooLarge { amount: 101, max: 100 }));

        assert_eq!(pairs(&solve_bounded(100, &set, 100).unwrap()), vec![(1, 100)]);

        let err = solve(MAX_CHANGE_AMOUNT + 1, &set).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooLarge { .. }));
    }

    #[test]
    fn test_zero_is_exact_even_with_zero_ceiling() {
        let set = coins(&[1]);
        assert_eq!(solve_bounded(0, &set, 0).unwrap(), ChangeOutcome::Exact);
    }

    #[test]
    fn test_outcome_json_shape() {
        let set = coins(&[2, 1]);
        let outcome = solve(3, &set).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "breakdown");
        assert_eq!(json["entries"][0]["value"], 2);
        assert_eq!(json["entries"][0]["kind"], "coin");

        let json = serde_json::to_value(ChangeOutcome::Infeasible { amount: 3 }).unwrap();
        assert_eq!(json["status"], "infeasible");
        assert_eq!(json["amount"], 3);
    }
}
