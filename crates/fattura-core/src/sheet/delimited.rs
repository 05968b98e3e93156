//! CSV and JSON output of extracted records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::SheetWriter;
use crate::error::SheetError;
use crate::models::invoice::{ExtractedRecord, EXTRACTED_HEADERS};

/// Comma-separated output with a header row.
pub struct CsvSheetWriter;

impl SheetWriter for CsvSheetWriter {
    fn write(&self, path: &Path, records: &[ExtractedRecord]) -> Result<(), SheetError> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(EXTRACTED_HEADERS)?;
        for record in records {
            wtr.write_record(record.to_row())?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON array keyed by the header names.
pub struct JsonSheetWriter;

impl SheetWriter for JsonSheetWriter {
    fn write(&self, path: &Path, records: &[ExtractedRecord]) -> Result<(), SheetError> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, records)?;
        out.flush()?;
        Ok(())
    }
}
