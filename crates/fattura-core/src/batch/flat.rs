//! Flatten XML files into a sheet, and rebuild XML files from a sheet.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use glob::glob;
use tracing::{debug, info};

use crate::error::Result;
use crate::sheet::{read_flat_rows, write_flat_rows};
use crate::xml::flatten::UNFLATTEN_ROOT;
use crate::xml::{flatten, to_pretty_xml, unflatten, FlatRow, XmlElement};

/// Column holding the seller's legal name.
pub const NAME_COLUMN: &str =
    "FatturaElettronicaHeader_CedentePrestatore_DatiAnagrafici_Anagrafica_Denominazione";

/// Column holding the document date.
pub const DATE_COLUMN: &str = "FatturaElettronicaBody_DatiGenerali_DatiGeneraliDocumento_Data";

/// Flatten every XML file matching `pattern` into one row each.
///
/// Returns the number of rows written.
pub fn flatten_files(pattern: &str, output: &Path, sheet_name: &str) -> Result<usize> {
    let mut rows = Vec::new();
    for entry in glob(pattern)? {
        let path = entry.map_err(|e| e.into_error())?;
        let xml = fs::read_to_string(&path)?;
        let root = XmlElement::parse(&xml)?;
        debug!("Flattened {}", path.display());
        rows.push(flatten(&root));
    }

    write_flat_rows(output, sheet_name, &rows)?;
    info!("Flattened {} file(s) into {}", rows.len(), output.display());
    Ok(rows.len())
}

/// Rebuild one XML document per spreadsheet row into `out_dir`.
///
/// An existing `out_dir` is cleared of `*.xml` files first.
pub fn unflatten_sheet(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    if out_dir.exists() {
        clear_xml_files(out_dir)?;
    } else {
        fs::create_dir_all(out_dir)?;
    }

    let rows = read_flat_rows(input)?;
    let mut written = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let path = out_dir.join(file_name_for(index, row));
        let xml = to_pretty_xml(&unflatten(UNFLATTEN_ROOT, row))?;
        fs::write(&path, xml)?;
        info!("XML file created: {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn clear_xml_files(dir: &Path) -> Result<()> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(".xml") && entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    debug!("Removed {} previous XML file(s) from {}", removed, dir.display());
    Ok(())
}

fn file_name_for(index: usize, row: &FlatRow) -> String {
    let name = safe_name(row.get(NAME_COLUMN).unwrap_or("UnknownName"));
    let date = safe_date(row.get(DATE_COLUMN).unwrap_or("UnknownDate"));
    format!("Invoice_{}_{}-{}.xml", index + 1, name, date)
}

/// Make a value usable in a file name.
pub fn safe_name(value: &str) -> String {
    value.replace(' ', "_").replace(['/', ':'], "-")
}

/// Drop the time part of a `YYYY-MM-DD HH:MM:SS` value; other values pass through.
pub fn safe_date(value: &str) -> String {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|moment| moment.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| value.to_string())
}
