use anyhow::{Context, Result};
use serde::Deserialize;

use crate::passenger::Pclass;

/// Tunable parameters of the large-family fare check.
///
/// Stored as a JSON object on disk; every field is optional:
/// ```json
/// {
///   "large_family_min_size": 5,
///   "target_class": 3,
///   "baseline_class": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub large_family_min_size: u32,
    pub target_class: Pclass,
    pub baseline_class: Pclass,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            large_family_min_size: 5,
            target_class: Pclass::Third,
            baseline_class: Pclass::First,
        }
    }
}

impl AnalysisConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read config {path}"))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid analysis config {path}"))?;
        Ok(config)
    }

    /// Falls back to [`AnalysisConfig::default`] when no path is given.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::load_or_default(None).unwrap();
        assert_eq!(config.large_family_min_size, 5);
        assert_eq!(config.target_class, Pclass::Third);
        assert_eq!(config.baseline_class, Pclass::First);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"large_family_min_size": 7}}"#).unwrap();

        let config = AnalysisConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.large_family_min_size, 7);
        assert_eq!(config.target_class, Pclass::Third);
    }

    #[test]
    fn test_invalid_class_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"target_class": 4}}"#).unwrap();

        assert!(AnalysisConfig::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AnalysisConfig::load("/nonexistent/titanic_stats.json").is_err());
    }
}
