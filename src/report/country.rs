//! Consumption-country resolution.
//!
//! MOSS/OSS taxes at the consumer's location, so every charge needs a
//! consumption country. Providers record the buyer's country in several
//! places depending on payment method and API age; resolution walks
//! them in a fixed precedence order.

use crate::core::{Charge, ReportError};

/// Resolve the consumption country for a charge.
///
/// Precedence, first hit wins:
/// 1. the payment source (type-keyed sub-object, then owner address)
/// 2. payment-method details (type-keyed sub-object)
/// 3. billing address
/// 4. shipping address
///
/// Returns the raw ISO code uppercased. Greece stays "GR" here; the
/// filing alias applies only where a code feeds a rate lookup or a
/// report row.
pub fn resolve_country(charge: &Charge) -> Option<String> {
    charge
        .source
        .as_ref()
        .and_then(|source| source.country_hint())
        .or_else(|| charge.payment_method_details.as_ref()?.country_hint())
        .or_else(|| charge.billing_details.as_ref()?.address.as_ref()?.country.as_deref())
        .or_else(|| charge.shipping.as_ref()?.address.as_ref()?.country.as_deref())
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
}

/// Consumption country as a hard requirement.
///
/// The eligibility path absorbs an unresolvable country as a silent
/// skip; this accessor is the one place the same condition is an error,
/// for callers that need the country outside report generation.
pub fn consumption_country(charge: &Charge) -> Result<String, ReportError> {
    resolve_country(charge).ok_or_else(|| ReportError::NoConsumptionCountry {
        charge: charge.display_id().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn charge(value: serde_json::Value) -> Charge {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn source_wins_over_everything() {
        let charge = charge(json!({
            "source": { "type": "sepa_debit", "sepa_debit": { "country": "FR" } },
            "payment_method_details": { "type": "card", "card": { "country": "IT" } },
            "billing_details": { "address": { "country": "DE" } },
            "shipping": { "address": { "country": "ES" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("FR"));
    }

    #[test]
    fn source_owner_address_beats_method_details() {
        let charge = charge(json!({
            "source": { "type": "card", "owner": { "address": { "country": "PT" } } },
            "payment_method_details": { "type": "card", "card": { "country": "IT" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("PT"));
    }

    #[test]
    fn method_details_beat_billing_address() {
        let charge = charge(json!({
            "payment_method_details": { "type": "card", "card": { "country": "IT" } },
            "billing_details": { "address": { "country": "DE" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("IT"));
    }

    #[test]
    fn billing_beats_shipping() {
        let charge = charge(json!({
            "billing_details": { "address": { "country": "DE" } },
            "shipping": { "address": { "country": "ES" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("DE"));
    }

    #[test]
    fn shipping_is_the_last_resort() {
        let charge = charge(json!({
            "shipping": { "address": { "country": "ES" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("ES"));
    }

    #[test]
    fn resolved_code_is_uppercased() {
        let charge = charge(json!({
            "billing_details": { "address": { "country": "it" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("IT"));
    }

    #[test]
    fn greece_resolves_raw() {
        let charge = charge(json!({
            "billing_details": { "address": { "country": "GR" } }
        }));
        assert_eq!(resolve_country(&charge).as_deref(), Some("GR"));
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert_eq!(resolve_country(&charge(json!({}))), None);
        let empty = charge(json!({ "billing_details": { "address": { "country": "" } } }));
        assert_eq!(resolve_country(&empty), None);
    }

    #[test]
    fn direct_access_raises() {
        let charge = charge(json!({ "id": "ch_1" }));
        let err = consumption_country(&charge).unwrap_err();
        assert!(matches!(
            err,
            ReportError::NoConsumptionCountry { ref charge } if charge == "ch_1"
        ));
    }
}
