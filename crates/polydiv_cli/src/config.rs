use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::format::OutputFormat;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "polydiv.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub fill_gaps: bool,
    pub format: OutputFormat,
    pub show_steps: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            fill_gaps: true,
            format: OutputFormat::Text,
            show_steps: false,
        }
    }
}

impl CliConfig {
    /// Load from `explicit`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// A missing default file yields the defaults; an explicit path that
    /// cannot be read is an error. Malformed TOML only logs a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Ok(Self::from_toml(&content, &path))
    }

    pub fn from_toml(content: &str, origin: &Path) -> Self {
        match toml::from_str::<Self>(content) {
            Ok(config) => {
                debug!(path = %origin.display(), ?config, "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %origin.display(), error = %e, "malformed config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml("show_steps = true", Path::new("inline"));
        assert_eq!(
            config,
            CliConfig {
                show_steps: true,
                ..CliConfig::default()
            }
        );
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let config = CliConfig::from_toml("fill_gaps = \"maybe\"", Path::new("inline"));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fill_gaps = false\nformat = \"json\"").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(!config.fill_gaps);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CliConfig::load(Some(&missing)).is_err());
    }
}
