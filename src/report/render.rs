//! Delimited-text rendering of the aggregated report.

use rust_decimal::Decimal;

use crate::core::MonetaryContext;

use super::aggregate::ReportGroup;
use super::schema::ReportSchema;

/// Serializes header, metadata, and group rows into the filing dialect.
pub(crate) struct Renderer<'a> {
    pub schema: ReportSchema,
    pub money: MonetaryContext,
    pub sale_type: Option<&'a str>,
}

impl Renderer<'_> {
    /// Render the complete report text.
    ///
    /// Row 1 carries only the schema tag, row 2 the seller VAT number,
    /// period, and year; each aggregated group follows as one row.
    pub fn render(
        &self,
        vat_number: &str,
        period: u8,
        year: i32,
        domestic: &str,
        groups: &[ReportGroup],
    ) -> String {
        let mut out = String::new();
        self.write_row(&mut out, &[self.schema.header_tag()]);
        self.write_row(&mut out, &[vat_number, &period.to_string(), &year.to_string()]);
        for group in groups {
            self.write_group(&mut out, domestic, group);
        }
        out
    }

    fn write_group(&self, out: &mut String, domestic: &str, group: &ReportGroup) {
        let rate = self.format_amount(group.vat_rate);
        let net = self.format_amount(group.net_sum);
        let vat = self.format_amount(group.vat_sum);
        let mut fields: Vec<&str> = vec![domestic, group.country.as_str(), &rate, &net, &vat];
        if let Some(tag) = self.sale_type {
            fields.push(tag);
        }
        self.write_row(out, &fields);
    }

    fn write_row(&self, out: &mut String, fields: &[&str]) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.schema.column_separator());
            }
            out.push_str(field);
        }
        out.push_str(self.schema.row_separator());
    }

    /// Decimal field: exactly two fractional digits with a comma
    /// separator, independent of any runtime locale.
    fn format_amount(&self, amount: Decimal) -> String {
        format!("{:.2}", self.money.round(amount)).replace('.', ",")
    }
}
