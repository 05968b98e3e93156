//! Invoice file generation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::generator::{InvoiceGenerator, SampleSource};
use crate::models::config::GenerationConfig;
use crate::xml::encode;

/// File name pattern of generated invoices: `{prefix}{token}.xml`.
#[derive(Debug, Clone)]
pub struct FileNaming {
    pub prefix: String,
    pub token_length: usize,
}

impl Default for FileNaming {
    fn default() -> Self {
        GenerationConfig::default().into()
    }
}

impl From<GenerationConfig> for FileNaming {
    fn from(config: GenerationConfig) -> Self {
        Self {
            prefix: config.file_prefix,
            token_length: config.token_length,
        }
    }
}

/// Interpret the count argument.
///
/// Anything but a positive integer falls back to `default`.
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    match raw.map(|s| s.trim().parse::<i64>()) {
        Some(Ok(n)) if n > 0 => n as usize,
        None => default,
        Some(_) => {
            warn!(
                "Invalid invoice count {:?}, using default of {}",
                raw.unwrap_or_default(),
                default
            );
            default
        }
    }
}

/// Create the output directory if it does not exist yet.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Generate `count` invoices into `dir`, one file each.
///
/// `on_file` is called after every write. Returns the written paths in order.
pub fn generate_batch<S, F>(
    dir: &Path,
    count: usize,
    naming: &FileNaming,
    generator: &mut InvoiceGenerator<S>,
    mut on_file: F,
) -> Result<Vec<PathBuf>>
where
    S: SampleSource,
    F: FnMut(&Path),
{
    prepare_output_dir(dir)?;

    let mut written = Vec::with_capacity(count);
    for _ in 0..count {
        let record = generator.generate();
        let xml = encode(&record)?;
        let name = format!(
            "{}{}.xml",
            naming.prefix,
            generator.token(naming.token_length)
        );
        let path = dir.join(name);

        fs::write(&path, xml)?;
        info!("Generated invoice: {}", path.display());
        on_file(&path);
        written.push(path);
    }

    Ok(written)
}
