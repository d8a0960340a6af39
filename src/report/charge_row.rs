//! Per-charge evaluation: one derived report row, or a reasoned skip.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{Charge, MonetaryContext, ReportError, countries};
use crate::rates::{ExchangeRateTable, VatRateProvider, applicable_rate};

use super::country::resolve_country;
use super::eligibility::{Exclusion, classify};
use super::schema::ReportSchema;

/// One charge's contribution to the report, prior to aggregation.
///
/// Amounts are unrounded EUR values; rounding happens at render time so
/// per-group sums do not accumulate rounding drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRow {
    /// Consumption country, filing alias applied.
    pub country: String,
    /// Applied standard VAT rate percent.
    pub vat_rate: Decimal,
    /// Net-of-VAT amount in EUR.
    pub net_amount: Decimal,
    /// VAT amount in EUR.
    pub vat_amount: Decimal,
}

/// Outcome of evaluating one charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The charge contributes a row.
    Row(ChargeRow),
    /// The charge is left out of the report.
    Skipped(SkipReason),
}

/// Why a charge contributes no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An eligibility rule excluded the charge.
    Excluded(Exclusion),
    /// The rate table has no entry for the consumption country.
    NoVatRate,
}

/// The per-charge rule pipeline, wired to one report run's reference
/// tables and conventions.
pub(crate) struct Pipeline<'a> {
    pub schema: ReportSchema,
    pub domestic: &'a str,
    pub vat_rates: &'a dyn VatRateProvider,
    pub exchange_rates: Option<&'a ExchangeRateTable>,
    pub money: MonetaryContext,
}

impl Pipeline<'_> {
    /// Run one charge through country resolution, eligibility, rate
    /// lookup, and amount normalization.
    ///
    /// The rate is resolved before the amount: normalization divides
    /// VAT out of the gross, so it needs the rate, while the rate needs
    /// only the country and date. A missing exchange rate (or missing
    /// settlement data under the legacy schema) aborts the whole
    /// report; every other failure is a per-charge skip.
    pub fn evaluate(&self, charge: &Charge) -> Result<Evaluation, ReportError> {
        let resolved = resolve_country(charge);
        if let Some(exclusion) = classify(charge, resolved.as_deref(), self.domestic) {
            return Ok(Evaluation::Skipped(SkipReason::Excluded(exclusion)));
        }
        let Some(raw) = resolved else {
            // classify() has already excluded this case.
            return Ok(Evaluation::Skipped(SkipReason::Excluded(
                Exclusion::NoConsumptionCountry,
            )));
        };

        let country = countries::filing_alias(&raw);
        let date = charge.created_date();
        let Some(rate) = applicable_rate(self.vat_rates, country, date) else {
            return Ok(Evaluation::Skipped(SkipReason::NoVatRate));
        };

        let gross = self.gross_eur(charge, date)?;
        let net_amount = gross / (Decimal::ONE + rate / Decimal::ONE_HUNDRED);
        let vat_amount = net_amount * rate / Decimal::ONE_HUNDRED;

        Ok(Evaluation::Row(ChargeRow {
            country: country.to_string(),
            vat_rate: rate,
            net_amount,
            vat_amount,
        }))
    }

    /// Gross amount in EUR, from the schema's amount source.
    fn gross_eur(&self, charge: &Charge, date: NaiveDate) -> Result<Decimal, ReportError> {
        let (amount, currency) = match self.schema {
            ReportSchema::Oss => (charge.amount, charge.currency.as_str()),
            ReportSchema::Moss => {
                let settlement =
                    charge
                        .settlement()
                        .ok_or_else(|| ReportError::MissingSettlement {
                            charge: charge.display_id().to_string(),
                        })?;
                (settlement.net, settlement.currency.as_str())
            }
        };

        let gross = self.money.from_minor_units(amount);
        if currency.eq_ignore_ascii_case(self.money.currency) {
            return Ok(gross);
        }
        let table = self
            .exchange_rates
            .ok_or_else(|| ReportError::NoExchangeRate {
                currency: currency.to_uppercase(),
                date,
            })?;
        table.to_eur(gross, currency, date)
    }
}
