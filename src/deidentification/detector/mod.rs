//! PHI detection module
//!
//! Provides the trait-based detection interface and its implementations.
//! Each detector handles one category; the scanner runs them in priority
//! order and hands every detector the spans collected so far.

pub mod dictionary;
pub mod patterns;
pub mod regex;

use crate::deidentification::models::{DetectedSpan, PhiCategory};

/// Trait for PHI detector implementations
///
/// A future NER-backed detector implements this trait and is registered with
/// the scanner in place of the dictionary detector.
pub trait PhiDetector: Send + Sync {
    /// Category this detector reports
    fn category(&self) -> PhiCategory;

    /// Fixed confidence attached to every span this detector emits
    fn confidence(&self) -> f32;

    /// Detect PHI in `text`
    ///
    /// `claimed` holds spans already reported by higher-priority detectors
    /// during the current scan. Detectors are free to ignore it.
    fn detect(&self, text: &str, claimed: &[DetectedSpan]) -> Vec<DetectedSpan>;
}

pub use self::dictionary::{NameDetector, NameDictionary, NameSource};
pub use self::regex::RegexDetector;
