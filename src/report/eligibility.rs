//! Report-eligibility rules for a single charge.

use crate::core::{Charge, ChargeStatus, countries, vat_id};

/// Why a charge stays out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Charge did not complete.
    NotSucceeded,
    /// Charge was refunded.
    Refunded,
    /// Metadata carries a syntactically valid VAT registration number:
    /// a business sale, outside the consumer scheme.
    BusinessSale,
    /// No consumption country could be resolved.
    NoConsumptionCountry,
    /// Consumption outside the EU.
    OutsideEu,
    /// Consumption in the seller's own country; filed domestically.
    Domestic,
}

/// Decide whether a charge is excluded from the report.
///
/// The conditions are independent; the cheap status checks run before
/// the membership lookups. `country` is the resolved consumption
/// country, raw (un-aliased); `domestic` is the seller's aliased home
/// country.
pub fn classify(charge: &Charge, country: Option<&str>, domestic: &str) -> Option<Exclusion> {
    if charge.status != ChargeStatus::Succeeded {
        return Some(Exclusion::NotSucceeded);
    }
    if charge.refunded {
        return Some(Exclusion::Refunded);
    }
    if charge.vat_number().is_some_and(vat_id::is_valid_vat_number) {
        return Some(Exclusion::BusinessSale);
    }
    let Some(country) = country else {
        return Some(Exclusion::NoConsumptionCountry);
    };
    if !countries::is_eu_country(country) {
        return Some(Exclusion::OutsideEu);
    }
    if countries::filing_alias(country) == domestic {
        return Some(Exclusion::Domestic);
    }
    None
}
