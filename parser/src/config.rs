//! Parser configuration.
//!
//! The defaults reproduce the fixed noise-marker list exactly; a config file
//! can only add markers on top of it, never remove one.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! noise:
//!   extra_markers:
//!     - "CONTINUED ON NEXT PAGE"
//! diagnostics:
//!   max_unmatched_samples: 50
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorksheetError};

/// Current configuration format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Default cap on stored unmatched/malformed line samples.
pub const DEFAULT_MAX_UNMATCHED_SAMPLES: usize = 50;

/// Additional noise markers, checked by substring containment like the
/// built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseConfig {
    #[serde(default)]
    pub extra_markers: Vec<String>,
}

/// Limits for diagnostic bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// How many unmatched or malformed line texts to keep in diagnostics.
    /// Counts are always exact.
    pub max_unmatched_samples: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            max_unmatched_samples: DEFAULT_MAX_UNMATCHED_SAMPLES,
        }
    }
}

/// Top-level parser configuration.
///
/// # Examples
///
/// ```
/// use worksheet_parser::ParserConfig;
///
/// let config: ParserConfig = serde_yaml::from_str(r#"
/// version: "1.0"
/// noise:
///   extra_markers: ["END OF REPORT"]
/// "#).unwrap();
/// assert_eq!(config.noise.extra_markers, vec!["END OF REPORT"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            noise: NoiseConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl ParserConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](WorksheetError::IoError) if the file cannot be
    /// read, [`YamlError`](WorksheetError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](WorksheetError::InvalidConfig) if validation fails.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that the version is present and no extra marker is blank.
    ///
    /// A blank marker would be contained in every line and turn the whole
    /// report into noise.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(WorksheetError::InvalidConfig(
                "version cannot be empty".to_string(),
            ));
        }
        if let Some(pos) = self
            .noise
            .extra_markers
            .iter()
            .position(|marker| marker.trim().is_empty())
        {
            return Err(WorksheetError::InvalidConfig(format!(
                "noise.extra_markers[{pos}] cannot be blank"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
noise:
  extra_markers:
    - "CONTINUED"
    - "END OF REPORT"
diagnostics:
  max_unmatched_samples: 5
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: ParserConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.noise.extra_markers, vec!["CONTINUED", "END OF REPORT"]);
        assert_eq!(config.diagnostics.max_unmatched_samples, 5);
    }

    #[test]
    fn test_deserialize_minimal_uses_defaults() {
        let config: ParserConfig = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_validate_rejects_blank_marker() {
        let mut config = ParserConfig::default();
        config.noise.extra_markers.push("  ".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, WorksheetError::InvalidConfig(msg) if msg.contains("[0]")));
    }

    #[test]
    fn test_validate_rejects_empty_version() {
        let config = ParserConfig {
            version: String::new(),
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worksheet.yml");

        let original: ParserConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.to_yaml_file(&path).unwrap();

        let loaded = ParserConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserConfig::from_yaml_file(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, WorksheetError::IoError(_)));
    }
}
