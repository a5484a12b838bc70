//! # Denominations Command

use serde::Serialize;
use tally_core::{Currency, DenominationKind};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationsResponse {
    pub currency: String,
    pub symbol: String,
    pub minor_digits: u8,
    pub denominations: Vec<DenominationRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationRow {
    pub value: u64,
    pub kind: DenominationKind,
    pub label: String,
}

/// Lists the active currency's set in configured (tie-break) order.
pub fn denominations(currency: &Currency) -> DenominationsResponse {
    DenominationsResponse {
        currency: currency.code().to_string(),
        symbol: currency.symbol().to_string(),
        minor_digits: currency.minor_digits(),
        denominations: currency
            .denominations()
            .iter()
            .map(|d| DenominationRow {
                value: d.value,
                kind: d.kind,
                label: currency.denomination_label(d.value),
            })
            .collect(),
    }
}
