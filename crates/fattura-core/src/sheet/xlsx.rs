//! XLSX output via rust_xlsxwriter.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use super::{SheetWriter, DEFAULT_SHEET_NAME};
use crate::error::SheetError;
use crate::models::invoice::{ExtractedRecord, EXTRACTED_HEADERS};
use crate::xml::FlatRow;

/// Writes records to a single named worksheet.
pub struct XlsxSheetWriter {
    sheet_name: String,
}

impl XlsxSheetWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for XlsxSheetWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&self, path: &Path, records: &[ExtractedRecord]) -> Result<(), SheetError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet().set_name(&self.sheet_name)?;
        write_header(sheet, EXTRACTED_HEADERS.iter().copied())?;

        for (row, record) in (1..).zip(records) {
            let row: RowNum = row;
            sheet.write_string(row, 0, &record.number)?;
            sheet.write_string(row, 1, &record.date)?;
            sheet.write_string(row, 2, &record.client_name)?;
            sheet.write_string(row, 3, &record.client_tax_code)?;
            match record.total_amount.to_f64() {
                Some(amount) => sheet.write_number(row, 4, amount)?,
                None => sheet.write_string(row, 4, record.total_amount.to_string())?,
            };
        }
        sheet.autofit();

        workbook.save(path)?;
        Ok(())
    }
}

/// Write flattened rows to one worksheet.
///
/// The header is the union of all keys in first-seen order; absent cells stay empty.
pub fn write_flat_rows(path: &Path, sheet_name: &str, rows: &[FlatRow]) -> Result<(), SheetError> {
    let mut columns: Vec<&str> = Vec::new();
    for key in rows.iter().flat_map(FlatRow::keys) {
        if !columns.contains(&key) {
            columns.push(key);
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name(sheet_name)?;
    write_header(sheet, columns.iter().copied())?;

    for (row_index, row) in (1..).zip(rows) {
        let row_index: RowNum = row_index;
        for (col, key) in (0..).zip(&columns) {
            let col: ColNum = col;
            if let Some(value) = row.get(key) {
                sheet.write_string(row_index, col, value)?;
            }
        }
    }
    sheet.autofit();

    workbook.save(path)?;
    Ok(())
}

fn write_header<'a>(
    sheet: &mut Worksheet,
    headers: impl Iterator<Item = &'a str>,
) -> Result<(), SheetError> {
    let bold = Format::new().set_bold();
    for (col, header) in (0..).zip(headers) {
        let col: ColNum = col;
        sheet.write_string_with_format(0, col, header, &bold)?;
    }
    Ok(())
}
