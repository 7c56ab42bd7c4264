//! Regex-based PHI detector

use super::{patterns::CompiledPattern, PhiDetector};
use crate::deidentification::models::{DetectedSpan, PhiCategory};

/// Regex-based PHI detector for a single compiled pattern
///
/// Emits one span per match, independently of what other detectors found.
#[derive(Debug, Clone)]
pub struct RegexDetector {
    pattern: CompiledPattern,
}

impl RegexDetector {
    /// Create a detector for a compiled pattern
    pub fn new(pattern: CompiledPattern) -> Self {
        Self { pattern }
    }

    /// Name of the underlying pattern rule
    pub fn rule_name(&self) -> &str {
        &self.pattern.name
    }
}

impl PhiDetector for RegexDetector {
    fn category(&self) -> PhiCategory {
        self.pattern.category
    }

    fn confidence(&self) -> f32 {
        self.pattern.confidence
    }

    fn detect(&self, text: &str, _claimed: &[DetectedSpan]) -> Vec<DetectedSpan> {
        self.pattern
            .regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.pattern.capture_group))
            .filter(|m| !m.is_empty())
            .map(|m| {
                DetectedSpan::new(
                    self.pattern.category,
                    text,
                    m.start(),
                    m.end(),
                    self.pattern.confidence,
                    self.pattern.replacement.as_str(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deidentification::detector::patterns::PatternRegistry;

    fn detector_for(category: PhiCategory) -> RegexDetector {
        let registry = PatternRegistry::default_patterns();
        let pattern = registry.patterns_for_category(category).unwrap()[0].clone();
        RegexDetector::new(pattern)
    }

    #[test]
    fn test_detect_email() {
        let detector = detector_for(PhiCategory::Email);
        let spans = detector.detect("Contact: john.doe@example.com", &[]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "john.doe@example.com");
        assert_eq!(spans[0].replacement, "[EMAIL]");
        assert_eq!(spans[0].confidence, 0.90);
    }

    #[test]
    fn test_detect_phone() {
        let detector = detector_for(PhiCategory::Phone);
        let spans = detector.detect("Call (555) 123-4567", &[]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "(555) 123-4567");
    }

    #[test]
    fn test_detect_mrn_reports_identifier_only() {
        let detector = detector_for(PhiCategory::Mrn);
        let text = "Patient MRN: AB123456 admitted";
        let spans = detector.detect(text, &[]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "AB123456");
        assert_eq!(&text[spans[0].start..spans[0].end], "AB123456");
    }

    #[test]
    fn test_detect_repeated_ssn_not_deduplicated() {
        let detector = detector_for(PhiCategory::Ssn);
        let spans = detector.detect("123-45-6789 and again 123-45-6789", &[]);

        assert_eq!(spans.len(), 2);
        assert_ne!(spans[0].start, spans[1].start);
    }

    #[test]
    fn test_detect_ignores_claimed_spans() {
        let detector = detector_for(PhiCategory::Date);
        let text = "seen 01/02/2023";
        let claimed = vec![DetectedSpan::new(
            PhiCategory::Address,
            text,
            0,
            text.len(),
            0.75,
            "[ADDRESS]",
        )];

        assert_eq!(detector.detect(text, &claimed).len(), 1);
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(detector_for(PhiCategory::Ssn).rule_name(), "ssn");
    }
}
