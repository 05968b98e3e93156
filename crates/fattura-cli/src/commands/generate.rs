//! Generate command - write synthetic invoice XML files.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;

use fattura_core::batch::{generate_batch, parse_count, FileNaming};
use fattura_core::InvoiceGenerator;

use super::{file_progress, load_config};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of invoices (anything but a positive integer uses the default)
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// Output directory
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

pub async fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let count = parse_count(args.count.as_deref(), config.generation.default_count);
    let dir = args.dir.unwrap_or(config.paths.xml_dir);
    let naming = FileNaming::from(config.generation);

    let pb = file_progress(count as u64)?;
    let mut generator = InvoiceGenerator::system();
    let written = generate_batch(&dir, count, &naming, &mut generator, |path| {
        pb.suspend(|| println!("Generated invoice: {}", path.display()));
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    println!(
        "{} Generated {} invoices in {} ({:?})",
        style("✓").green(),
        written.len(),
        dir.display(),
        start.elapsed()
    );

    Ok(())
}
