//! Invoice records shared by the generation and extraction pipelines.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Column headers of an extracted record, in output order.
pub const EXTRACTED_HEADERS: [&str; 5] =
    ["Number", "Date", "ClientName", "ClientTaxCode", "TotalAmount"];

/// A complete synthetic invoice, as produced by the generator.
///
/// The `client_*` fields are sampled independently of one another, so a tax
/// code does not have to belong to the named client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Transmission progressive identifier (UUID).
    pub id: String,

    /// Issue date.
    pub date: NaiveDate,

    /// Invoice number, `00{k}/2025`.
    pub number: String,

    /// Document total with two fraction digits.
    pub total_amount: Decimal,

    /// Buyer name.
    pub client_name: String,

    /// Buyer fiscal code.
    pub client_tax_code: String,

    /// Buyer street and number.
    pub client_address: String,

    /// Buyer city.
    pub client_city: String,

    /// Buyer province code.
    pub client_province: String,

    /// Buyer postal code (CAP).
    pub client_postal_code: String,
}

/// The reduced set of fields recovered from an invoice document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtractedRecord {
    pub number: String,
    pub date: String,
    pub client_name: String,
    pub client_tax_code: String,
    pub total_amount: Decimal,
}

impl ExtractedRecord {
    /// Cell values in [`EXTRACTED_HEADERS`] order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.number.clone(),
            self.date.clone(),
            self.client_name.clone(),
            self.client_tax_code.clone(),
            self.total_amount.to_string(),
        ]
    }
}

impl From<&InvoiceRecord> for ExtractedRecord {
    fn from(record: &InvoiceRecord) -> Self {
        Self {
            number: record.number.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            client_name: record.client_name.clone(),
            client_tax_code: record.client_tax_code.clone(),
            total_amount: record.total_amount,
        }
    }
}
