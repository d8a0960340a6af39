//! Monetary context and minor-unit arithmetic.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Amounts stay at full precision through conversion, VAT
//! extraction, and aggregation; rounding happens once, at the output
//! boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Explicit monetary conventions for one report run.
///
/// Threaded by value into amount normalization, VAT calculation, and
/// rendering; there is no process-wide currency or rounding default to
/// mutate.
#[derive(Debug, Clone, Copy)]
pub struct MonetaryContext {
    /// Pivot currency all conversions route through.
    pub currency: &'static str,
    /// Rounding applied when an amount reaches the output boundary.
    pub rounding: RoundingStrategy,
    /// Fractional digits at the output boundary.
    pub scale: u32,
}

impl MonetaryContext {
    /// EUR, half-up, two fractional digits — the MOSS/OSS filing
    /// convention.
    pub fn eur() -> Self {
        Self {
            currency: "EUR",
            rounding: RoundingStrategy::MidpointAwayFromZero,
            scale: 2,
        }
    }

    /// Round an amount to the output scale.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale, self.rounding)
    }

    /// Interpret a minor-unit (cent) integer as a decimal amount.
    pub fn from_minor_units(&self, amount: i64) -> Decimal {
        Decimal::new(amount, self.scale)
    }
}

impl Default for MonetaryContext {
    fn default() -> Self {
        Self::eur()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn minor_units_to_decimal() {
        let money = MonetaryContext::eur();
        assert_eq!(money.from_minor_units(25120), dec!(251.20));
        assert_eq!(money.from_minor_units(5), dec!(0.05));
        assert_eq!(money.from_minor_units(0), dec!(0.00));
        assert_eq!(money.from_minor_units(-150), dec!(-1.50));
    }

    #[test]
    fn rounds_half_up() {
        let money = MonetaryContext::eur();
        assert_eq!(money.round(dec!(45.298)), dec!(45.30));
        assert_eq!(money.round(dec!(2.345)), dec!(2.35));
        assert_eq!(money.round(dec!(2.344)), dec!(2.34));
        assert_eq!(money.round(dec!(205.901639)), dec!(205.90));
    }

    #[test]
    fn rounds_away_from_zero_on_midpoint() {
        let money = MonetaryContext::eur();
        assert_eq!(money.round(dec!(0.005)), dec!(0.01));
        assert_eq!(money.round(dec!(-0.005)), dec!(-0.01));
    }
}
