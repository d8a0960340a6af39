//! Read-only reference tables: standard VAT rates and EUR-based
//! exchange rates. Both are loaded once by the caller and never mutated
//! by the report core.

mod exchange;
mod vat;

pub use exchange::ExchangeRateTable;
pub use vat::{StaticVatRates, VatRateEntry, VatRateProvider, VatRateTable, applicable_rate};
