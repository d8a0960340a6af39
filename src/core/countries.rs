//! EU membership lookup and the Greek filing alias.

/// EU member state country codes (ISO 3166-1 alpha-2), plus "EL", the
/// alias under which Greece files VAT. Sorted for binary search.
static EU_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// Check whether `code` (uppercase alpha-2) is an EU member state.
pub fn is_eu_country(code: &str) -> bool {
    EU_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Translate an ISO country code into the code used in EU VAT filings.
///
/// Greece is "GR" in ISO 3166-1 but "EL" everywhere in the VAT system:
/// rate tables, VAT-number prefixes, and report rows all use "EL".
pub fn filing_alias(code: &str) -> &str {
    if code == "GR" { "EL" } else { code }
}
