//! Pattern library for PHI detection
//!
//! The built-in registry is compiled once per process and shared by
//! reference. Custom libraries can be loaded from TOML; their order in the
//! file is their scan priority.

use crate::deidentification::models::PhiCategory;
use crate::domain::{Result, ScrubError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Rule name, used in diagnostics
    pub name: String,
    /// PHI category label
    pub category: String,
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Replacement token; defaults to the category token
    #[serde(default)]
    pub replacement: Option<String>,
    /// Capture group whose extent becomes the span (0 = whole match)
    #[serde(default)]
    pub capture_group: usize,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Rule name
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// PHI category
    pub category: PhiCategory,
    /// Confidence score
    pub confidence: f32,
    /// Replacement token
    pub replacement: String,
    /// Capture group reported as the span
    pub capture_group: usize,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

struct BuiltinRule {
    name: &'static str,
    category: PhiCategory,
    pattern: &'static str,
    confidence: f32,
    capture_group: usize,
}

const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "mrn_labeled",
        category: PhiCategory::Mrn,
        pattern: r"\b(?i:MRN|Medical\s+Record\s+Number)\s*[:#]?\s*([A-Z0-9]{6,12})\b",
        confidence: 0.95,
        capture_group: 1,
    },
    BuiltinRule {
        name: "ssn",
        category: PhiCategory::Ssn,
        pattern: r"\b\d{3}-\d{2}-\d{4}\b",
        confidence: 0.98,
        capture_group: 0,
    },
    BuiltinRule {
        name: "phone_nanp",
        category: PhiCategory::Phone,
        pattern: r"(?:\+?\b1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
        confidence: 0.85,
        capture_group: 0,
    },
    BuiltinRule {
        name: "date_numeric",
        category: PhiCategory::Date,
        pattern: r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
        confidence: 0.80,
        capture_group: 0,
    },
    BuiltinRule {
        name: "email",
        category: PhiCategory::Email,
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        confidence: 0.90,
        capture_group: 0,
    },
    BuiltinRule {
        name: "street_address",
        category: PhiCategory::Address,
        pattern: r"(?i)\b\d{1,6}\s+(?:[A-Za-z0-9.'-]+\s+){1,4}?(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Court|Ct|Way|Place|Pl)\b\.?(?:,?\s*(?:Apt|Suite|Unit|#)\.?\s*[A-Za-z0-9-]+)?",
        confidence: 0.75,
        capture_group: 0,
    },
];

static BUILTIN_REGISTRY: Lazy<Arc<PatternRegistry>> = Lazy::new(|| {
    let patterns = BUILTIN_RULES
        .iter()
        .map(|rule| CompiledPattern {
            name: rule.name.to_string(),
            regex: Regex::new(rule.pattern).expect("built-in PHI pattern must compile"),
            category: rule.category,
            confidence: rule.confidence,
            replacement: rule.category.default_replacement().to_string(),
            capture_group: rule.capture_group,
        })
        .collect();
    Arc::new(PatternRegistry::from_compiled(patterns))
});

/// Ordered registry of compiled PHI patterns
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
    patterns_by_category: HashMap<PhiCategory, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Shared handle to the built-in registry
    ///
    /// Patterns are compiled on first use and reused for the life of the process.
    pub fn default_patterns() -> Arc<Self> {
        Arc::clone(&BUILTIN_REGISTRY)
    }

    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrubError::Pattern(format!(
                "Failed to read pattern library {}: {e}",
                path.display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| ScrubError::Pattern(format!("Failed to parse pattern library: {e}")))?;

        if library.patterns.is_empty() {
            return Err(ScrubError::Pattern(
                "Pattern library defines no patterns".to_string(),
            ));
        }

        let mut compiled = Vec::new();
        for def in library.patterns {
            let category = PhiCategory::parse(&def.category).ok_or_else(|| {
                ScrubError::Pattern(format!(
                    "Invalid category in pattern '{}': {}",
                    def.name, def.category
                ))
            })?;

            if !(0.0..=1.0).contains(&def.confidence) {
                return Err(ScrubError::Pattern(format!(
                    "Confidence for pattern '{}' must be between 0.0 and 1.0, got {}",
                    def.name, def.confidence
                )));
            }

            let replacement = def
                .replacement
                .clone()
                .unwrap_or_else(|| category.default_replacement().to_string());

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    ScrubError::Pattern(format!(
                        "Invalid regex in pattern '{}': {pattern_str}: {e}",
                        def.name
                    ))
                })?;

                if def.capture_group >= regex.captures_len() {
                    return Err(ScrubError::Pattern(format!(
                        "Pattern '{}' has no capture group {}",
                        def.name, def.capture_group
                    )));
                }

                compiled.push(CompiledPattern {
                    name: def.name.clone(),
                    regex,
                    category,
                    confidence: def.confidence,
                    replacement: replacement.clone(),
                    capture_group: def.capture_group,
                });
            }
        }

        Ok(Self::from_compiled(compiled))
    }

    fn from_compiled(patterns: Vec<CompiledPattern>) -> Self {
        let mut patterns_by_category: HashMap<PhiCategory, Vec<CompiledPattern>> = HashMap::new();
        for pattern in &patterns {
            patterns_by_category
                .entry(pattern.category)
                .or_default()
                .push(pattern.clone());
        }

        Self {
            patterns,
            patterns_by_category,
        }
    }

    /// Get all patterns, in priority order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: PhiCategory) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }
}
