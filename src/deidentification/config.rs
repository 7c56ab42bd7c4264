//! Detection configuration

use crate::deidentification::models::PhiCategory;
use crate::domain::{Result, ScrubError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that shape the scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Detectors below this confidence are not run
    #[serde(default)]
    pub confidence_threshold: f32,

    /// Categories to skip (e.g. `["DATE"]`)
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Path to a custom pattern library TOML file
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Path to a name dictionary (one name per line)
    #[serde(default)]
    pub name_dictionary: Option<PathBuf>,

    /// Names added on top of the dictionary
    #[serde(default)]
    pub extra_names: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.0,
            disabled: Vec::new(),
            pattern_library: None,
            name_dictionary: None,
            extra_names: Vec::new(),
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ScrubError::Configuration(format!(
                "confidence_threshold must be between 0.0 and 1.0, got {}",
                self.confidence_threshold
            )));
        }

        self.disabled_categories()?;

        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(ScrubError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(ScrubError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        if let Some(ref path) = self.name_dictionary {
            if !path.exists() {
                return Err(ScrubError::Configuration(format!(
                    "Name dictionary file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Parsed list of disabled categories
    pub fn disabled_categories(&self) -> Result<Vec<PhiCategory>> {
        self.disabled
            .iter()
            .map(|label| {
                PhiCategory::parse(label).ok_or_else(|| {
                    ScrubError::Configuration(format!("Unknown PHI category: {label}"))
                })
            })
            .collect()
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PHI_SCRUB_DETECTION_CONFIDENCE_THRESHOLD") {
            self.confidence_threshold = val.parse().map_err(|_| {
                ScrubError::Configuration(format!(
                    "Invalid PHI_SCRUB_DETECTION_CONFIDENCE_THRESHOLD value: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("PHI_SCRUB_DETECTION_DISABLED") {
            self.disabled = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(val) = std::env::var("PHI_SCRUB_DETECTION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("PHI_SCRUB_DETECTION_NAME_DICTIONARY") {
            self.name_dictionary = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.confidence_threshold, 0.0);
        assert!(config.disabled.is_empty());
        assert!(config.pattern_library.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        let config = DetectionConfig {
            confidence_threshold: 1.2,
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_disabled_category() {
        let config = DetectionConfig {
            disabled: vec!["FAX".to_string()],
            ..DetectionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScrubError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_pattern_library() {
        let config = DetectionConfig {
            pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_categories_parsed() {
        let config = DetectionConfig {
            disabled: vec!["name".to_string(), "Phone".to_string()],
            ..DetectionConfig::default()
        };
        assert_eq!(
            config.disabled_categories().unwrap(),
            vec![PhiCategory::Name, PhiCategory::Phone]
        );
    }
}
