//! Extraction of invoice files into records.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FatturaError, Result};
use crate::models::invoice::ExtractedRecord;
use crate::xml::decode;

/// List regular files in `dir` whose name ends in `.xml` (case-sensitive).
///
/// Order is whatever the file system enumerates; it is not sorted.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(".xml") && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Decode `files` one at a time, in order.
///
/// The first unreadable or undecodable file aborts the whole run.
pub async fn extract_files<F>(files: &[PathBuf], mut on_file: F) -> Result<Vec<ExtractedRecord>>
where
    F: FnMut(&Path),
{
    let mut records = Vec::with_capacity(files.len());

    for path in files {
        let xml = tokio::fs::read_to_string(path).await?;
        let record = decode(&xml).await.map_err(|source| FatturaError::Decode {
            path: path.clone(),
            source,
        })?;

        debug!("Decoded {} from {}", record.number, path.display());
        records.push(record);
        on_file(path);
    }

    Ok(records)
}

/// Decode every XML file in `dir`.
pub async fn extract_records(dir: &Path) -> Result<Vec<ExtractedRecord>> {
    let files = list_xml_files(dir)?;
    extract_files(&files, |_| {}).await
}
