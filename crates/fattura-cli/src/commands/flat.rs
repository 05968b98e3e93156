//! Flatten and unflatten commands - path-keyed spreadsheet views of XML files.

use std::path::PathBuf;

use clap::Args;
use console::style;

use fattura_core::batch::{flatten_files, unflatten_sheet};

use super::load_config;

/// Arguments for the flatten command.
#[derive(Args)]
pub struct FlattenArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output workbook
    #[arg(short, long, default_value = "XMLList.xlsx")]
    output: PathBuf,
}

/// Arguments for the unflatten command.
#[derive(Args)]
pub struct UnflattenArgs {
    /// Input workbook with path-keyed column headers
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory (existing XML files in it are removed)
    #[arg(short, long, default_value = "XML_TEST")]
    output_dir: PathBuf,
}

pub async fn run_flatten(args: FlattenArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let rows = flatten_files(&args.input, &args.output, &config.paths.sheet_name)?;
    if rows == 0 {
        println!(
            "{} No files matched {}",
            style("!").yellow(),
            args.input
        );
    }

    println!(
        "{} Data from {} file(s) saved in: {}",
        style("✓").green(),
        rows,
        args.output.display()
    );
    Ok(())
}

pub async fn run_unflatten(args: UnflattenArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let written = unflatten_sheet(&args.input, &args.output_dir)?;
    for path in &written {
        println!("{} XML file created: {}", style("✓").green(), path.display());
    }
    println!(
        "{} All XML files successfully generated in: {}",
        style("✓").green(),
        args.output_dir.display()
    );
    Ok(())
}
