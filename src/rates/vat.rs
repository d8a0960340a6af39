//! Standard VAT rates: provider trait, loadable table, built-in
//! defaults, and the per-charge rate resolution.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Source of standard VAT rates, keyed by filing country code.
///
/// The built-in [`StaticVatRates`] table is the default; callers inject
/// their own implementation (fresher reference data, test fixtures)
/// without touching call sites.
pub trait VatRateProvider {
    /// Standard rate percent for `country`, or `None` if the country
    /// has no entry. Absence is a meaningful state, not an error: a
    /// charge without a rate is dropped from the report.
    fn standard_rate(&self, country: &str) -> Option<Decimal>;
}

/// Rate-table entry in the external source shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRateEntry {
    /// Standard rate percent.
    pub standard_rate: Decimal,
}

/// VAT-rate table loadable from the documented source shape:
/// `{ "IT": { "standard_rate": 22 }, ... }`, keyed by filing alias.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatRateTable {
    rates: HashMap<String, VatRateEntry>,
}

impl VatRateTable {
    /// Table over caller-supplied entries.
    pub fn new(rates: HashMap<String, VatRateEntry>) -> Self {
        Self { rates }
    }
}

impl VatRateProvider for VatRateTable {
    fn standard_rate(&self, country: &str) -> Option<Decimal> {
        self.rates.get(country).map(|entry| entry.standard_rate)
    }
}

/// Built-in EU-27 standard rates, keyed by filing alias (Greece under
/// "EL"). Sorted for binary search.
static STANDARD_RATES: &[(&str, Decimal)] = &[
    ("AT", dec!(20)),
    ("BE", dec!(21)),
    ("BG", dec!(20)),
    ("CY", dec!(19)),
    ("CZ", dec!(21)),
    ("DE", dec!(19)),
    ("DK", dec!(25)),
    ("EE", dec!(20)),
    ("EL", dec!(24)),
    ("ES", dec!(21)),
    ("FI", dec!(24)),
    ("FR", dec!(20)),
    ("HR", dec!(25)),
    ("HU", dec!(27)),
    ("IE", dec!(23)),
    ("IT", dec!(22)),
    ("LT", dec!(21)),
    ("LU", dec!(17)),
    ("LV", dec!(21)),
    ("MT", dec!(18)),
    ("NL", dec!(21)),
    ("PL", dec!(23)),
    ("PT", dec!(23)),
    ("RO", dec!(19)),
    ("SE", dec!(25)),
    ("SI", dec!(22)),
    ("SK", dec!(20)),
];

/// Default [`VatRateProvider`] backed by the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVatRates;

impl VatRateProvider for StaticVatRates {
    fn standard_rate(&self, country: &str) -> Option<Decimal> {
        STANDARD_RATES
            .binary_search_by_key(&country, |&(code, _)| code)
            .ok()
            .map(|i| STANDARD_RATES[i].1)
    }
}

/// Resolve the standard rate applicable to a consumption country on a
/// given charge date.
///
/// Ireland ran a temporarily lowered 21 % standard rate until
/// 2021-02-28 and restored 23 % on 2021-03-01; the transition override
/// supersedes the table for Ireland on all dates. Every other country
/// uses the provider's value unmodified.
pub fn applicable_rate(
    provider: &dyn VatRateProvider,
    country: &str,
    on: NaiveDate,
) -> Option<Decimal> {
    if country == "IE" {
        let restored = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        return Some(if on < restored { dec!(21) } else { dec!(23) });
    }
    provider.standard_rate(country)
}
