//! Syntactic validation of EU VAT registration numbers.
//!
//! Format-only: no checksum verification and no registry lookup. In the
//! report pipeline a syntactically valid VAT number on a charge marks a
//! business sale, which the consumer-VAT scheme excludes.

/// Check whether `value` looks like an EU VAT registration number.
pub fn is_valid_vat_number(value: &str) -> bool {
    parse_vat_number(value).is_some()
}

/// Split a syntactically valid VAT number into (country prefix, body).
///
/// The two-letter prefix selects the national pattern; unknown prefixes
/// fail. Greece files under "EL", so a "GR" prefix is not a VAT number.
pub fn parse_vat_number(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    if value.len() < 4 || !value.is_ascii() {
        return None;
    }
    let (country, body) = value.split_at(2);
    matches_national_pattern(country, body).then_some((country, body))
}

fn matches_national_pattern(country: &str, body: &str) -> bool {
    match country {
        "AT" => body.len() == 9 && body.starts_with('U') && digits(&body[1..]),
        "BE" => body.len() == 10 && digits(body),
        "BG" => (body.len() == 9 || body.len() == 10) && digits(body),
        "CY" => {
            body.len() == 9 && digits(&body[..8]) && body.as_bytes()[8].is_ascii_alphabetic()
        }
        "CZ" => (8..=10).contains(&body.len()) && digits(body),
        "DE" => body.len() == 9 && digits(body) && body.as_bytes()[0] != b'0',
        "DK" => body.len() == 8 && digits(body),
        "EE" | "EL" | "PT" => body.len() == 9 && digits(body),
        "ES" => body.len() == 9 && alphanumeric(body),
        "FI" => body.len() == 8 && digits(body),
        "FR" => body.len() == 11 && alphanumeric(&body[..2]) && digits(&body[2..]),
        "HR" | "IT" | "LV" => body.len() == 11 && digits(body),
        "HU" => body.len() == 8 && digits(body),
        "IE" => (body.len() == 8 || body.len() == 9) && alphanumeric(body),
        "LT" => (body.len() == 9 || body.len() == 12) && digits(body),
        "LU" => body.len() == 8 && digits(body),
        "MT" => body.len() == 8 && digits(body),
        "NL" => {
            body.len() == 12
                && digits(&body[..9])
                && body.as_bytes()[9] == b'B'
                && digits(&body[10..])
        }
        "PL" | "SK" => body.len() == 10 && digits(body),
        "RO" => (2..=10).contains(&body.len()) && digits(body),
        "SE" => body.len() == 12 && digits(body),
        "SI" => body.len() == 8 && digits(body),
        _ => false,
    }
}

fn digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
