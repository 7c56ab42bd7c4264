//! Scan reporting for de-identification
//!
//! Aggregates detection statistics over many texts. Samples never carry the
//! matched value itself, only a truncated SHA-256 fingerprint of it.

use crate::deidentification::models::{DeidentifiedText, DetectedSpan, PhiCategory};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

const MAX_SAMPLES: usize = 20;
const SAMPLES_PER_TEXT: usize = 3;

/// Report with PHI detection statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Total texts analyzed
    pub total_texts: usize,

    /// Total PHI spans detected
    pub total_phi_detected: usize,

    /// PHI detections by category
    pub detections_by_category: HashMap<PhiCategory, usize>,

    /// Sample detections
    pub samples: Vec<ScanSample>,

    /// Warnings about overlapping detections and similar
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// A single detection, fingerprinted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSample {
    /// PHI category
    pub category: PhiCategory,

    /// Token the span was replaced with
    pub replacement: String,

    /// First 16 hex digits of SHA-256 over the matched value
    pub value_fingerprint: String,

    /// Span start in the original text
    pub start: usize,

    /// Span end in the original text
    pub end: usize,

    /// Confidence score (0.0-1.0)
    pub confidence: f32,
}

/// Processing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per text (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Texts with PHI detected
    pub texts_with_phi: usize,

    /// Texts without PHI
    pub texts_without_phi: usize,
}

impl ScanReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_texts: 0,
            total_phi_detected: 0,
            detections_by_category: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Add results from a de-identified text
    pub fn add_text(&mut self, result: &DeidentifiedText) {
        self.total_texts += 1;
        self.stats.total_processing_time_ms += result.processing_time_ms;

        if result.detections.is_empty() {
            self.stats.texts_without_phi += 1;
        } else {
            self.stats.texts_with_phi += 1;
            self.total_phi_detected += result.detections.len();

            for span in &result.detections {
                *self.detections_by_category.entry(span.category).or_insert(0) += 1;
            }

            for span in result.detections.iter().take(SAMPLES_PER_TEXT) {
                self.add_sample(span);
            }

            for (a, b) in result.cross_category_overlaps() {
                self.add_warning(format!(
                    "Text {}: {} span {}..{} overlaps {} span {}..{}",
                    result.request_id, a.category, a.start, a.end, b.category, b.start, b.end
                ));
            }
        }

        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_texts as u64;
    }

    fn add_sample(&mut self, span: &DetectedSpan) {
        if self.samples.len() >= MAX_SAMPLES {
            return;
        }

        self.samples.push(ScanSample {
            category: span.category,
            replacement: span.replacement.clone(),
            value_fingerprint: fingerprint(&span.value),
            start: span.start,
            end: span.end,
            confidence: span.confidence,
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                     PHI SCAN REPORT                           \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Texts Analyzed:        {}\n",
            self.total_texts
        ));
        output.push_str(&format!(
            "  Texts with PHI:              {}\n",
            self.stats.texts_with_phi
        ));
        output.push_str(&format!(
            "  Texts without PHI:           {}\n",
            self.stats.texts_without_phi
        ));
        output.push_str(&format!(
            "  Total PHI Spans Detected:    {}\n",
            self.total_phi_detected
        ));
        output.push_str(&format!(
            "  Avg Processing Time:         {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push('\n');

        if !self.detections_by_category.is_empty() {
            output.push_str("🔍 PHI DETECTIONS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE DETECTIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Category:     {}\n", sample.category));
                output.push_str(&format!("    Span:         {}..{}\n", sample.start, sample.end));
                output.push_str(&format!(
                    "    Confidence:   {:.2}%\n",
                    sample.confidence * 100.0
                ));
                output.push_str(&format!("    Fingerprint:  {}\n", sample.value_fingerprint));
                output.push_str(&format!("    Replacement:  \"{}\"\n", sample.replacement));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new()
    }
}

fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    format!("{digest:x}")[..16].to_string()
}
