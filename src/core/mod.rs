//! Charge input model, error taxonomy, monetary context, and country
//! reference data.

pub mod countries;
mod error;
mod money;
mod types;
pub mod vat_id;

pub use countries::{filing_alias, is_eu_country};
pub use error::ReportError;
pub use money::MonetaryContext;
pub use types::*;
pub use vat_id::is_valid_vat_number;
