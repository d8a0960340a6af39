//! Grouping and summation of surviving charge rows.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::{ReportError, countries};

use super::charge_row::ChargeRow;

/// One aggregated report row: every charge for a (country, rate) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    /// Consumption country, filing alias applied.
    pub country: String,
    /// VAT rate percent shared by the group.
    pub vat_rate: Decimal,
    /// Sum of net-of-VAT amounts in EUR, unrounded.
    pub net_sum: Decimal,
    /// Sum of VAT amounts in EUR, unrounded.
    pub vat_sum: Decimal,
}

/// Derive the seller's domestic (turnover) country from its VAT number.
///
/// The first two characters carry the country prefix; the filing alias
/// applies, so Greek registrations come out as "EL" either way. A
/// number too short to carry a prefix cannot anchor the report.
pub fn turnover_country(vat_number: &str) -> Result<String, ReportError> {
    let prefix: String = vat_number.trim().chars().take(2).collect();
    if prefix.len() < 2 || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ReportError::NoTurnoverCountry {
            vat_number: vat_number.to_string(),
        });
    }
    Ok(countries::filing_alias(&prefix.to_uppercase()).to_string())
}

/// Group rows by (country, rate) and sum their amounts.
///
/// Group order is first-seen order over the input sequence, not a sort.
/// Rows for the domestic country are dropped here as well — the
/// eligibility rules exclude them earlier, and aggregation drops any
/// that still arrive.
pub fn aggregate(rows: impl IntoIterator<Item = ChargeRow>, domestic: &str) -> Vec<ReportGroup> {
    let mut groups: Vec<ReportGroup> = Vec::new();
    let mut index: HashMap<(String, Decimal), usize> = HashMap::new();

    for row in rows {
        if row.country == domestic {
            continue;
        }
        match index.get(&(row.country.clone(), row.vat_rate)) {
            Some(&at) => {
                groups[at].net_sum += row.net_amount;
                groups[at].vat_sum += row.vat_amount;
            }
            None => {
                index.insert((row.country.clone(), row.vat_rate), groups.len());
                groups.push(ReportGroup {
                    country: row.country,
                    vat_rate: row.vat_rate,
                    net_sum: row.net_amount,
                    vat_sum: row.vat_amount,
                });
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(country: &str, rate: Decimal, net: Decimal, vat: Decimal) -> ChargeRow {
        ChargeRow {
            country: country.to_string(),
            vat_rate: rate,
            net_amount: net,
            vat_amount: vat,
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let rows = vec![
            row("IT", dec!(22), dec!(100), dec!(22)),
            row("FR", dec!(20), dec!(50), dec!(10)),
            row("IT", dec!(22), dec!(105.90), dec!(23.30)),
        ];
        let groups = aggregate(rows, "SE");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].country, "IT");
        assert_eq!(groups[0].net_sum, dec!(205.90));
        assert_eq!(groups[0].vat_sum, dec!(45.30));
        assert_eq!(groups[1].country, "FR");
        assert_eq!(groups[1].net_sum, dec!(50));
    }

    #[test]
    fn same_country_different_rate_stays_split() {
        let rows = vec![
            row("IE", dec!(23), dec!(100), dec!(23)),
            row("IE", dec!(21), dec!(100), dec!(21)),
            row("IE", dec!(23), dec!(10), dec!(2.30)),
        ];
        let groups = aggregate(rows, "SE");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].vat_rate, dec!(23));
        assert_eq!(groups[0].net_sum, dec!(110));
        assert_eq!(groups[1].vat_rate, dec!(21));
    }

    #[test]
    fn domestic_rows_are_dropped() {
        let rows = vec![
            row("SE", dec!(25), dec!(100), dec!(25)),
            row("IT", dec!(22), dec!(100), dec!(22)),
        ];
        let groups = aggregate(rows, "SE");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].country, "IT");
    }

    #[test]
    fn turnover_country_from_prefix() {
        assert_eq!(turnover_country("SE556000016701").unwrap(), "SE");
        assert_eq!(turnover_country("de123456789").unwrap(), "DE");
        assert_eq!(turnover_country(" FR12345678901 ").unwrap(), "FR");
    }

    #[test]
    fn turnover_country_applies_filing_alias() {
        assert_eq!(turnover_country("EL123456789").unwrap(), "EL");
        assert_eq!(turnover_country("GR123456789").unwrap(), "EL");
    }

    #[test]
    fn short_or_numeric_vat_number_fails() {
        assert!(matches!(
            turnover_country("").unwrap_err(),
            ReportError::NoTurnoverCountry { .. }
        ));
        assert!(matches!(
            turnover_country("S").unwrap_err(),
            ReportError::NoTurnoverCountry { .. }
        ));
        assert!(matches!(
            turnover_country("556000016701").unwrap_err(),
            ReportError::NoTurnoverCountry { .. }
        ));
    }
}
