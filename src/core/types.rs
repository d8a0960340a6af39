use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payment-provider charge record, as retrieved from the provider API.
///
/// The report core only reads charges; retrieval, pagination, and
/// expansion of nested objects are the caller's concern. Unknown
/// provider fields are ignored on input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Charge {
    /// Provider-assigned charge identifier.
    pub id: Option<String>,
    /// Processing status; only succeeded charges are reportable.
    pub status: ChargeStatus,
    /// Whether the charge has been refunded.
    pub refunded: bool,
    /// Gross amount in minor units of `currency`.
    pub amount: i64,
    /// ISO 4217 currency code, lowercase as delivered by the provider.
    pub currency: String,
    /// Creation timestamp, seconds since the Unix epoch.
    pub created: i64,
    /// Free-form key/value metadata. A `vat_number` entry marks the
    /// buyer as VAT-registered.
    pub metadata: Option<ChargeMetadata>,
    /// Payment-method details, keyed by the declared method type.
    pub payment_method_details: Option<PaymentMethodDetails>,
    /// Billing details captured at payment time.
    pub billing_details: Option<BillingDetails>,
    /// Shipping information, if any.
    pub shipping: Option<Shipping>,
    /// Legacy payment source object.
    pub source: Option<PaymentSource>,
    /// Settlement transaction; a bare ID unless expanded at retrieval.
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
}

impl Charge {
    /// Creation timestamp as a calendar date (UTC). Timestamps outside
    /// the representable range clamp to the epoch.
    pub fn created_date(&self) -> NaiveDate {
        DateTime::from_timestamp(self.created, 0)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .date_naive()
    }

    /// The buyer's VAT registration number from metadata, if any.
    pub fn vat_number(&self) -> Option<&str> {
        self.metadata.as_ref()?.vat_number.as_deref()
    }

    /// The expanded settlement transaction, if retrieval expanded it.
    pub fn settlement(&self) -> Option<&BalanceTransaction> {
        self.balance_transaction.as_ref()?.expanded()
    }

    pub(crate) fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }
}

/// Charge processing status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// Payment completed.
    Succeeded,
    /// Payment still in flight.
    #[default]
    Pending,
    /// Payment failed.
    Failed,
}

/// Free-form charge metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeMetadata {
    /// Buyer's VAT registration number, when collected at checkout.
    pub vat_number: Option<String>,
    /// Remaining metadata entries, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Payment-method details: a declared type naming a sibling sub-object
/// with the method-specific fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodDetails {
    /// Declared payment-method type, e.g. "card" or "sepa_debit".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Method sub-objects, keyed by type name.
    #[serde(flatten)]
    pub methods: serde_json::Map<String, Value>,
}

impl PaymentMethodDetails {
    /// Country recorded in the type-keyed method sub-object.
    pub fn country_hint(&self) -> Option<&str> {
        country_field(self.methods.get(self.kind.as_deref()?)?)
    }
}

/// Legacy payment source: a declared type or object kind naming a
/// sub-object, plus an owner whose address serves as a fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSource {
    /// Declared source type (modern sources).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Object kind (older sources).
    pub object: Option<String>,
    /// Owner details.
    pub owner: Option<SourceOwner>,
    /// Source sub-objects, keyed by type name.
    #[serde(flatten)]
    pub details: serde_json::Map<String, Value>,
}

impl PaymentSource {
    /// Country hint: type-keyed sub-object first, owner address second.
    pub fn country_hint(&self) -> Option<&str> {
        self.typed_country().or_else(|| self.owner_country())
    }

    fn typed_country(&self) -> Option<&str> {
        let key = self.kind.as_deref().or(self.object.as_deref())?;
        country_field(self.details.get(key)?)
    }

    fn owner_country(&self) -> Option<&str> {
        self.owner.as_ref()?.address.as_ref()?.country.as_deref()
    }
}

/// Owner block on a payment source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOwner {
    /// Owner's address.
    pub address: Option<ChargeAddress>,
}

/// Billing details captured with the charge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDetails {
    /// Billing address.
    pub address: Option<ChargeAddress>,
}

/// Shipping block on a charge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipping {
    /// Shipping address.
    pub address: Option<ChargeAddress>,
}

/// Address fragment; only the country matters to the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeAddress {
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}

/// A provider reference that is either a bare object ID or the expanded
/// object, depending on retrieval options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Unexpanded reference.
    Id(String),
    /// Expanded object.
    Object(T),
}

impl<T> Expandable<T> {
    /// The expanded object, if present.
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }
}

/// Settlement-side transaction carrying the fee-reduced net amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceTransaction {
    /// Settled amount net of provider fees, in minor units of `currency`.
    pub net: i64,
    /// Settlement currency, lowercase ISO 4217.
    pub currency: String,
}

/// `country`, then `address_country`, on a nested provider object.
fn country_field(object: &Value) -> Option<&str> {
    object
        .get("country")
        .or_else(|| object.get("address_country"))
        .and_then(Value::as_str)
}
