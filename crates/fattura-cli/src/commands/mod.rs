//! Subcommand implementations.

pub mod config;
pub mod extract;
pub mod flat;
pub mod generate;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use fattura_core::FatturaConfig;

/// Load the config file if one was given, otherwise the user config written
/// by `config init` / `config set`, otherwise the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FatturaConfig> {
    match config_path {
        Some(path) => Ok(FatturaConfig::from_file(Path::new(path))?),
        None => load_or_default(&default_config_path()),
    }
}

/// Per-user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fattura")
        .join("config.json")
}

pub(crate) fn load_or_default(path: &Path) -> anyhow::Result<FatturaConfig> {
    if path.exists() {
        Ok(FatturaConfig::from_file(path)?)
    } else {
        Ok(FatturaConfig::default())
    }
}

/// Progress bar over a known number of files.
pub fn file_progress(len: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}
