//! Extract command - decode a directory of invoices into one spreadsheet.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use fattura_core::batch::{extract_files, list_xml_files};
use fattura_core::{SheetFormat, SheetWriter};

use super::{file_progress, load_config};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Directory of invoice XML files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// CSV file
    Csv,
    /// JSON array
    Json,
}

impl From<OutputFormat> for SheetFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xlsx => SheetFormat::Xlsx,
            OutputFormat::Csv => SheetFormat::Csv,
            OutputFormat::Json => SheetFormat::Json,
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let format = SheetFormat::from(args.format);

    let dir = args.dir.unwrap_or(config.paths.xml_dir);
    let output = args
        .output
        .unwrap_or_else(|| config.paths.workbook.with_extension(format.extension()));

    let files = list_xml_files(&dir)?;
    info!("Found {} XML files in {}", files.len(), dir.display());

    let pb = file_progress(files.len() as u64)?;
    let records = extract_files(&files, |_| pb.inc(1)).await?;
    pb.finish_and_clear();

    format
        .writer(&config.paths.sheet_name)
        .write(&output, &records)?;

    println!(
        "{} {} file created successfully at: {} ({} invoices)",
        style("✓").green(),
        format.extension().to_uppercase(),
        output.display(),
        records.len()
    );

    Ok(())
}
