//! PHI scanner
//!
//! Runs an ordered list of detectors over a text and returns every span they
//! report, sorted ascending by start offset.

use crate::deidentification::detector::{
    patterns::PatternRegistry, NameDetector, NameDictionary, NameSource, PhiDetector,
    RegexDetector,
};
use crate::deidentification::models::{DetectedSpan, PhiCategory};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered collection of PHI detectors
///
/// Detectors run in registration order. Only the name detector looks at
/// spans collected earlier in the same scan; overlaps between other
/// categories are reported as-is.
pub struct Scanner {
    detectors: Vec<Arc<dyn PhiDetector>>,
}

impl Scanner {
    /// Scanner with the built-in patterns and common first-name dictionary
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customised scanner
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::default()
    }

    /// Scanner over an explicit detector list, run in the given order
    pub fn with_detectors(detectors: Vec<Arc<dyn PhiDetector>>) -> Self {
        Self { detectors }
    }

    /// Categories handled by this scanner, in priority order
    pub fn categories(&self) -> Vec<PhiCategory> {
        self.detectors.iter().map(|d| d.category()).collect()
    }

    /// Detect PHI in `text`
    ///
    /// Empty or whitespace-only input yields no spans.
    pub fn scan(&self, text: &str) -> Vec<DetectedSpan> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut spans: Vec<DetectedSpan> = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(text, &spans);
            tracing::trace!(
                category = %detector.category(),
                matches = found.len(),
                "Detector finished"
            );
            spans.extend(found);
        }

        // stable: equal starts keep detector priority order
        spans.sort_by_key(|span| span.start);

        tracing::debug!(
            text_len = text.len(),
            detectors = self.detectors.len(),
            spans = spans.len(),
            "Scan complete"
        );

        spans
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("categories", &self.categories())
            .finish()
    }
}

/// Builder for [`Scanner`]
///
/// Regex detectors come from the pattern registry in registry order; the
/// name detector is always appended last.
pub struct ScannerBuilder {
    registry: Arc<PatternRegistry>,
    name_source: Arc<dyn NameSource>,
    name_detector: Option<Arc<dyn PhiDetector>>,
    confidence_threshold: f32,
    disabled: HashSet<PhiCategory>,
}

impl Default for ScannerBuilder {
    fn default() -> Self {
        Self {
            registry: PatternRegistry::default_patterns(),
            name_source: Arc::new(NameDictionary::common_first_names()),
            name_detector: None,
            confidence_threshold: 0.0,
            disabled: HashSet::new(),
        }
    }
}

impl ScannerBuilder {
    /// Use a custom pattern registry
    pub fn registry(mut self, registry: Arc<PatternRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom name source for the dictionary detector
    pub fn name_source(mut self, source: Arc<dyn NameSource>) -> Self {
        self.name_source = source;
        self
    }

    /// Replace the dictionary detector with another name detector
    pub fn name_detector(mut self, detector: Arc<dyn PhiDetector>) -> Self {
        self.name_detector = Some(detector);
        self
    }

    /// Skip detectors whose confidence is below `threshold`
    pub fn confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Do not run detectors for `category`
    pub fn disable(mut self, category: PhiCategory) -> Self {
        self.disabled.insert(category);
        self
    }

    /// Build the scanner
    pub fn build(self) -> Scanner {
        let mut detectors: Vec<Arc<dyn PhiDetector>> = self
            .registry
            .all_patterns()
            .iter()
            .cloned()
            .map(|pattern| Arc::new(RegexDetector::new(pattern)) as Arc<dyn PhiDetector>)
            .collect();

        let name_detector = self
            .name_detector
            .unwrap_or_else(|| Arc::new(NameDetector::new(self.name_source)));
        detectors.push(name_detector);

        detectors.retain(|d| {
            !self.disabled.contains(&d.category()) && d.confidence() >= self.confidence_threshold
        });

        Scanner::with_detectors(detectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scanner_priority_order() {
        let scanner = Scanner::new();
        assert_eq!(scanner.categories(), PhiCategory::ALL.to_vec());
    }

    #[test]
    fn test_scan_empty_and_whitespace() {
        let scanner = Scanner::new();
        assert!(scanner.scan("").is_empty());
        assert!(scanner.scan("   \n\t ").is_empty());
    }

    #[test]
    fn test_scan_sorted_by_start() {
        let scanner = Scanner::new();
        let spans = scanner.scan("SSN 123-45-6789, email a.b@example.org, Mary");
        assert_eq!(spans.len(), 3);
        assert!(spans.windows(2).all(|w| w[0].start <= w[1].start));
        assert_eq!(spans[0].category, PhiCategory::Ssn);
        assert_eq!(spans[2].category, PhiCategory::Name);
    }

    #[test]
    fn test_confidence_threshold_drops_low_confidence_detectors() {
        let scanner = Scanner::builder().confidence_threshold(0.85).build();
        assert_eq!(
            scanner.categories(),
            vec![
                PhiCategory::Mrn,
                PhiCategory::Ssn,
                PhiCategory::Phone,
                PhiCategory::Email
            ]
        );
    }

    #[test]
    fn test_disable_category() {
        let scanner = Scanner::builder().disable(PhiCategory::Name).build();
        assert!(!scanner.categories().contains(&PhiCategory::Name));
        assert!(scanner.scan("Mary").is_empty());
    }

    #[test]
    fn test_custom_name_source() {
        let scanner = Scanner::builder()
            .name_source(Arc::new(NameDictionary::from_names(["Bartholomew"])))
            .build();
        let spans = scanner.scan("Bartholomew met Mary");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "Bartholomew");
    }

    struct FixedDetector;

    impl PhiDetector for FixedDetector {
        fn category(&self) -> PhiCategory {
            PhiCategory::Name
        }

        fn confidence(&self) -> f32 {
            0.99
        }

        fn detect(&self, text: &str, _claimed: &[DetectedSpan]) -> Vec<DetectedSpan> {
            text.find("Dr. Who")
                .map(|start| {
                    vec![DetectedSpan::new(
                        PhiCategory::Name,
                        text,
                        start,
                        start + 7,
                        0.99,
                        "[PATIENT]",
                    )]
                })
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_name_detector_substitution() {
        let scanner = Scanner::builder()
            .name_detector(Arc::new(FixedDetector))
            .build();
        let spans = scanner.scan("Referred by Dr. Who, see John");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "Dr. Who");
        assert_eq!(spans[0].confidence, 0.99);
    }
}
