//! Spreadsheet output of extracted records and flattened rows.

mod delimited;
mod reader;
mod xlsx;

pub use delimited::{CsvSheetWriter, JsonSheetWriter};
pub use reader::read_flat_rows;
pub use xlsx::{write_flat_rows, XlsxSheetWriter};

use std::path::Path;

use crate::error::SheetError;
use crate::models::invoice::ExtractedRecord;

/// Default worksheet name.
pub const DEFAULT_SHEET_NAME: &str = "Invoices";

/// Writes a full set of extracted records to one output file.
pub trait SheetWriter {
    /// Write a header row followed by one row per record, replacing `path`.
    fn write(&self, path: &Path, records: &[ExtractedRecord]) -> Result<(), SheetError>;
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl SheetFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SheetFormat::Xlsx => "xlsx",
            SheetFormat::Csv => "csv",
            SheetFormat::Json => "json",
        }
    }

    /// Writer for this format. The sheet name only applies to XLSX.
    pub fn writer(&self, sheet_name: &str) -> Box<dyn SheetWriter> {
        match self {
            SheetFormat::Xlsx => Box::new(XlsxSheetWriter::new(sheet_name)),
            SheetFormat::Csv => Box::new(CsvSheetWriter),
            SheetFormat::Json => Box::new(JsonSheetWriter),
        }
    }
}
