//! Configuration handling
//!
//! Four required path strings loaded from a TOML file. A missing, extra or
//! empty field aborts the run before any data is touched. Keys keep the
//! original camelCase spelling of the deployed config files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directory holding the raw dataset
    pub input_directory: String,
    /// Raw dataset file name
    pub input_file: String,
    /// Directory for the processed dataset
    pub output_directory: String,
    /// Processed dataset file name
    pub output_file: String,
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("inputDirectory", &self.input_directory),
            ("inputFile", &self.input_file),
            ("outputDirectory", &self.output_directory),
            ("outputFile", &self.output_file),
        ] {
            if value.is_empty() {
                bail!("Config field {} must not be empty", field);
            }
        }
        Ok(())
    }

    /// Full path of the raw dataset (directory and file name concatenated,
    /// matching the deployed config convention of a trailing slash in the
    /// directory field)
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.input_directory, self.input_file))
    }

    /// Full path for the processed dataset
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.output_directory, self.output_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_config() {
        let (_dir, path) = write_config(
            r#"
inputDirectory = "data/"
inputFile = "train.csv"
outputDirectory = "out/"
outputFile = "processed.csv"
"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.input_path(), PathBuf::from("data/train.csv"));
        assert_eq!(config.output_path(), PathBuf::from("out/processed.csv"));
    }

    #[test]
    fn test_missing_field_fails() {
        let (_dir, path) = write_config(
            r#"
inputDirectory = "data/"
inputFile = "train.csv"
outputDirectory = "out/"
"#,
        );
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_unknown_field_fails() {
        let (_dir, path) = write_config(
            r#"
inputDirectory = "data/"
inputFile = "train.csv"
outputDirectory = "out/"
outputFile = "processed.csv"
extra = "nope"
"#,
        );
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_empty_field_fails() {
        let (_dir, path) = write_config(
            r#"
inputDirectory = ""
inputFile = "train.csv"
outputDirectory = "out/"
outputFile = "processed.csv"
"#,
        );
        assert!(Config::from_file(&path).is_err());
    }
}
