//! # moss-report
//!
//! Quarterly EU MOSS/OSS VAT filing reports from payment-provider
//! charge records.
//!
//! A batch of charges runs through a per-charge rule pipeline —
//! consumption-country resolution, eligibility filtering, EUR
//! normalization, VAT-rate resolution (including the Irish rate
//! transition of 2021) — and is then grouped by (country, rate) and
//! rendered as the fixed semicolon-delimited filing text.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Amounts stay at full precision through conversion and
//! aggregation and are rounded half-up to cents only at render time.
//!
//! Retrieval of charges, maintenance of VAT-rate and exchange-rate
//! reference data, and registry-side VAT-number validation are the
//! caller's concern; the crate validates VAT numbers by syntax only.
//!
//! ## Quick Start
//!
//! ```rust
//! use moss_report::{Charge, Generator, ExchangeRateTable, ReportConfig};
//!
//! let charges: Vec<Charge> = serde_json::from_value(serde_json::json!([
//!     {
//!         "id": "ch_1",
//!         "status": "succeeded",
//!         "amount": 25120,
//!         "currency": "eur",
//!         "created": 1600128000,
//!         "payment_method_details": { "type": "card", "card": { "country": "IT" } }
//!     },
//!     {
//!         "id": "ch_2",
//!         "status": "succeeded",
//!         "amount": 213000,
//!         "currency": "sek",
//!         "created": 1583020800,
//!         "billing_details": { "address": { "country": "DE" } }
//!     }
//! ]))
//! .unwrap();
//!
//! let rates: ExchangeRateTable =
//!     serde_json::from_str(r#"{ "2020-03-01": { "SEK": 10.65 } }"#).unwrap();
//!
//! let config = ReportConfig::new("SE556000016701", 3, 2020);
//! let report = Generator::new(&config)
//!     .exchange_rates(&rates)
//!     .generate(&charges)
//!     .unwrap();
//!
//! assert_eq!(
//!     report,
//!     "OSS_001;\r\n\
//!      SE556000016701;3;2020;\r\n\
//!      SE;IT;22,00;205,90;45,30;\r\n\
//!      SE;DE;19,00;168,07;31,93;\r\n"
//! );
//! ```

pub mod core;
pub mod rates;
pub mod report;

pub use crate::core::{Charge, ChargeStatus, MonetaryContext, ReportError};
pub use crate::rates::{ExchangeRateTable, StaticVatRates, VatRateProvider, VatRateTable};
pub use crate::report::{Generator, ReportConfig, ReportSchema, generate};
