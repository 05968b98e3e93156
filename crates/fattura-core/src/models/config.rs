//! Configuration for the generation and extraction pipelines.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for fattura.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FatturaConfig {
    /// File locations.
    pub paths: PathsConfig,

    /// Generation settings.
    pub generation: GenerationConfig,
}

/// Input and output locations, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory that receives generated XML files and is scanned on extraction.
    pub xml_dir: PathBuf,

    /// Spreadsheet written by extraction.
    pub workbook: PathBuf,

    /// Worksheet name used for extracted records.
    pub sheet_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            xml_dir: PathBuf::from("XMLFiles"),
            workbook: PathBuf::from("Invoices.xlsx"),
            sheet_name: "Invoices".to_string(),
        }
    }
}

/// Invoice generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of invoices when the count argument is missing or invalid.
    pub default_count: usize,

    /// File name prefix of generated invoices.
    pub file_prefix: String,

    /// Length of the random file name suffix.
    pub token_length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_count: 5,
            file_prefix: "invoice_".to_string(),
            token_length: 12,
        }
    }
}

impl FatturaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"paths": {"xml_dir": "out"}}"#).unwrap();

        let config = FatturaConfig::from_file(&path).unwrap();
        assert_eq!(config.paths.xml_dir, PathBuf::from("out"));
        assert_eq!(config.paths.sheet_name, "Invoices");
        assert_eq!(config.generation.default_count, 5);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FatturaConfig::default();
        config.generation.default_count = 9;
        config.save(&path).unwrap();

        let loaded = FatturaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.generation.default_count, 9);
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FatturaConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
