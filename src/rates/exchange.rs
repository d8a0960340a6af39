//! EUR-based daily exchange-rate reference table.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ReportError;

/// Daily exchange rates: ISO date → uppercase currency → EUR-based rate.
///
/// Rates are quoted EUR→currency, so recovering EUR takes the
/// reciprocal. The table is loaded once per run and only read; the
/// documented source shape is
/// `{ "2020-03-01": { "SEK": 10.65, ... }, ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateTable {
    rates: HashMap<String, HashMap<String, Decimal>>,
}

impl ExchangeRateTable {
    /// Table over caller-supplied daily rates.
    pub fn new(rates: HashMap<String, HashMap<String, Decimal>>) -> Self {
        Self { rates }
    }

    /// The stored EUR→`currency` rate for `date`, if present. A stored
    /// zero cannot be inverted and counts as absent.
    pub fn rate(&self, date: NaiveDate, currency: &str) -> Option<Decimal> {
        self.rates
            .get(&date.format("%Y-%m-%d").to_string())?
            .get(&currency.to_uppercase())
            .copied()
            .filter(|rate| !rate.is_zero())
    }

    /// Convert a gross amount in `currency` into EUR by dividing out
    /// the stored EUR→`currency` rate.
    ///
    /// A missing rate is a reference-data gap and fatal for the whole
    /// report run, not a per-charge condition.
    pub fn to_eur(
        &self,
        amount: Decimal,
        currency: &str,
        date: NaiveDate,
    ) -> Result<Decimal, ReportError> {
        let rate = self
            .rate(date, currency)
            .ok_or_else(|| ReportError::NoExchangeRate {
                currency: currency.to_uppercase(),
                date,
            })?;
        Ok(amount / rate)
    }
}
