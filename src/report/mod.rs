//! Quarterly MOSS/OSS report generation.
//!
//! The whole charge batch flows through a per-charge rule pipeline
//! (consumption country → eligibility → VAT rate → EUR normalization),
//! then fans in through aggregation and rendering:
//!
//! ```text
//! [Charge] → country → eligibility → rate → amounts → ChargeRow ─┐
//! [Charge] → …                                       ChargeRow ─┼→ groups → text
//! [Charge] → …                                       (skipped)  ─┘
//! ```
//!
//! Generation is a pure, synchronous batch transformation over
//! read-only reference tables. Per-charge evaluation is order-
//! independent, but group order on output is the first-seen order of
//! (country, rate) pairs across the *input* sequence, so any concurrent
//! evaluation must restore input order before aggregation.
//!
//! # Example
//!
//! ```rust
//! use moss_report::{Charge, ReportConfig, generate};
//!
//! let charges: Vec<Charge> = serde_json::from_value(serde_json::json!([{
//!     "id": "ch_1",
//!     "status": "succeeded",
//!     "refunded": false,
//!     "amount": 25120,
//!     "currency": "eur",
//!     "created": 1600128000,
//!     "payment_method_details": { "type": "card", "card": { "country": "IT" } }
//! }]))
//! .unwrap();
//!
//! let config = ReportConfig::new("SE556000016701", 3, 2020);
//! let report = generate(&charges, &config).unwrap();
//! assert_eq!(
//!     report,
//!     "OSS_001;\r\nSE556000016701;3;2020;\r\nSE;IT;22,00;205,90;45,30;\r\n"
//! );
//! ```

mod aggregate;
mod charge_row;
mod country;
mod eligibility;
mod render;
mod schema;

pub use aggregate::{ReportGroup, aggregate, turnover_country};
pub use charge_row::{ChargeRow, Evaluation, SkipReason};
pub use country::{consumption_country, resolve_country};
pub use eligibility::{Exclusion, classify};
pub use schema::ReportSchema;

use crate::core::{Charge, MonetaryContext, ReportError};
use crate::rates::{ExchangeRateTable, StaticVatRates, VatRateProvider};

/// Parameters of one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Seller's VAT registration number; its two-letter prefix names
    /// the domestic country.
    pub vat_number: String,
    /// Quarter within `year` (1–4).
    pub period: u8,
    /// Filing year.
    pub year: i32,
    /// Rule-set variant the report follows.
    pub schema: ReportSchema,
    /// Optional sale-type tag appended as a trailing column on every
    /// group row.
    pub sale_type: Option<String>,
    /// Monetary conventions (pivot currency, rounding).
    pub money: MonetaryContext,
}

impl ReportConfig {
    /// Configuration for the current OSS schema with the EUR half-up
    /// conventions.
    pub fn new(vat_number: impl Into<String>, period: u8, year: i32) -> Self {
        Self {
            vat_number: vat_number.into(),
            period,
            year,
            schema: ReportSchema::default(),
            sale_type: None,
            money: MonetaryContext::eur(),
        }
    }

    /// Select the rule-set variant.
    pub fn schema(mut self, schema: ReportSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Append a sale-type tag column to every group row.
    pub fn sale_type(mut self, tag: impl Into<String>) -> Self {
        self.sale_type = Some(tag.into());
        self
    }
}

/// Report generator wiring a configuration to injected reference
/// tables.
///
/// Defaults to the built-in VAT-rate table and no exchange rates (every
/// charge must then already be in EUR).
pub struct Generator<'a> {
    config: &'a ReportConfig,
    vat_rates: &'a dyn VatRateProvider,
    exchange_rates: Option<&'a ExchangeRateTable>,
}

impl<'a> Generator<'a> {
    /// Generator over the built-in reference tables.
    pub fn new(config: &'a ReportConfig) -> Self {
        Self {
            config,
            vat_rates: &StaticVatRates,
            exchange_rates: None,
        }
    }

    /// Inject exchange rates for non-EUR charges.
    pub fn exchange_rates(mut self, table: &'a ExchangeRateTable) -> Self {
        self.exchange_rates = Some(table);
        self
    }

    /// Override the VAT-rate source.
    pub fn vat_rates(mut self, provider: &'a dyn VatRateProvider) -> Self {
        self.vat_rates = provider;
        self
    }

    /// Evaluate every charge, aggregate, and render the report text.
    ///
    /// All-or-nothing: a malformed seller VAT number, a missing
    /// exchange rate, or (legacy schema) missing settlement data aborts
    /// the whole report. Only the defined per-charge conditions
    /// (ineligibility, unresolved consumption country, missing VAT
    /// rate) drop individual charges.
    pub fn generate(&self, charges: &[Charge]) -> Result<String, ReportError> {
        let domestic = turnover_country(&self.config.vat_number)?;
        let pipeline = self.pipeline(&domestic);

        let mut rows = Vec::new();
        for charge in charges {
            match pipeline.evaluate(charge)? {
                Evaluation::Row(row) => rows.push(row),
                Evaluation::Skipped(_) => {}
            }
        }

        let groups = aggregate(rows, &domestic);
        let renderer = render::Renderer {
            schema: self.config.schema,
            money: self.config.money,
            sale_type: self.config.sale_type.as_deref(),
        };
        Ok(renderer.render(
            &self.config.vat_number,
            self.config.period,
            self.config.year,
            &domestic,
            &groups,
        ))
    }

    /// Evaluate a single charge without rendering, for callers that
    /// want per-charge visibility (reconciliation, audit logs).
    pub fn evaluate(&self, charge: &Charge) -> Result<Evaluation, ReportError> {
        let domestic = turnover_country(&self.config.vat_number)?;
        self.pipeline(&domestic).evaluate(charge)
    }

    fn pipeline<'b>(&'b self, domestic: &'b str) -> charge_row::Pipeline<'b> {
        charge_row::Pipeline {
            schema: self.config.schema,
            domestic,
            vat_rates: self.vat_rates,
            exchange_rates: self.exchange_rates,
            money: self.config.money,
        }
    }
}

/// Generate a report with the built-in reference tables.
///
/// Shorthand for [`Generator::new`] followed by
/// [`generate`](Generator::generate); use the generator directly to
/// inject exchange rates or a VAT-rate provider.
pub fn generate(charges: &[Charge], config: &ReportConfig) -> Result<String, ReportError> {
    Generator::new(config).generate(charges)
}
