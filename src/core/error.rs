use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can abort report generation.
///
/// Report generation is all-or-nothing: every variant here propagates to
/// the caller and no partial report is produced. Per-charge conditions
/// (ineligibility, unresolved consumption country inside the eligibility
/// path, missing VAT rate) are skips, not errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// No consumption country could be resolved for a charge that was
    /// accessed outside the eligibility path.
    #[error("no consumption country for charge '{charge}'")]
    NoConsumptionCountry {
        /// Provider identifier of the offending charge.
        charge: String,
    },

    /// The exchange-rate table has no usable entry for this currency on
    /// this date. Signals a reference-data gap the caller must fix.
    #[error("no exchange rate for {currency} on {date}")]
    NoExchangeRate {
        /// Uppercase ISO 4217 currency code.
        currency: String,
        /// Charge date the lookup was made for.
        date: NaiveDate,
    },

    /// The seller VAT number is too short to carry a country prefix, so
    /// the report cannot be anchored to a domestic country.
    #[error("cannot derive turnover country from VAT number '{vat_number}'")]
    NoTurnoverCountry {
        /// The malformed seller VAT number.
        vat_number: String,
    },

    /// Legacy schema only: an eligible charge carries no expanded
    /// settlement transaction, so there is no settled amount to report.
    #[error("charge '{charge}' has no expanded settlement transaction")]
    MissingSettlement {
        /// Provider identifier of the offending charge.
        charge: String,
    },
}
