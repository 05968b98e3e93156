//! Workbook input via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};

use crate::error::SheetError;
use crate::xml::FlatRow;

/// Read the first worksheet as flattened rows.
///
/// The first row provides the column keys. Empty cells read as `""`, whole
/// numbers lose their fraction and date cells render as `YYYY-MM-DD HH:MM:SS`.
pub fn read_flat_rows(path: &Path) -> Result<Vec<FlatRow>, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetError::NoSheets(path.display().to_string()))?;
    let range = workbook.worksheet_range(&first)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = header.iter().map(cell_text).collect();

    Ok(rows
        .map(|cells| {
            let mut row = FlatRow::new();
            for (column, cell) in columns.iter().zip(cells) {
                if !column.is_empty() {
                    row.insert(column.as_str(), cell_text(cell));
                }
            }
            row
        })
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => {
            excel_serial_text(dt.as_f64()).unwrap_or_else(|| dt.as_f64().to_string())
        }
        other => other.to_string(),
    }
}

fn excel_serial_text(serial: f64) -> Option<String> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    let moment = epoch.checked_add_signed(Duration::milliseconds(millis))?;
    Some(moment.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Float(20121.0)), "20121");
        assert_eq!(cell_text(&Data::Float(123.45)), "123.45");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::String("MI".into())), "MI");
    }

    #[test]
    fn test_excel_serial() {
        assert_eq!(excel_serial_text(45658.0).as_deref(), Some("2025-01-01 00:00:00"));
        assert_eq!(excel_serial_text(45658.5).as_deref(), Some("2025-01-01 12:00:00"));
    }

    #[test]
    fn test_reads_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "A_Nome").unwrap();
        sheet.write_string(0, 1, "A_CAP").unwrap();
        sheet.write_string(0, 2, "B_Data").unwrap();
        sheet.write_string(1, 0, "Mario Rossi").unwrap();
        sheet.write_number(1, 1, 20121).unwrap();
        let date = ExcelDateTime::from_ymd(2025, 3, 4).unwrap();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        sheet.write_datetime_with_format(1, 2, &date, &date_format).unwrap();
        sheet.write_string(2, 0, "Anna Neri").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_flat_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("A_Nome"), Some("Mario Rossi"));
        assert_eq!(rows[0].get("A_CAP"), Some("20121"));
        assert_eq!(rows[0].get("B_Data"), Some("2025-03-04 00:00:00"));
        assert_eq!(rows[1].get("A_CAP"), Some(""));
    }
}
