//! PHI span data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// PHI category detected in free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhiCategory {
    /// Medical Record Numbers
    Mrn,
    /// Social Security Numbers
    Ssn,
    /// Telephone numbers
    Phone,
    /// Numeric calendar dates
    Date,
    /// Email addresses
    Email,
    /// Street addresses
    Address,
    /// Person names (dictionary matched)
    Name,
}

impl PhiCategory {
    /// Every category, in scan priority order
    pub const ALL: [PhiCategory; 7] = [
        Self::Mrn,
        Self::Ssn,
        Self::Phone,
        Self::Date,
        Self::Email,
        Self::Address,
        Self::Name,
    ];

    /// Get the upper-case label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mrn => "MRN",
            Self::Ssn => "SSN",
            Self::Phone => "PHONE",
            Self::Date => "DATE",
            Self::Email => "EMAIL",
            Self::Address => "ADDRESS",
            Self::Name => "NAME",
        }
    }

    /// Default replacement token substituted for this category
    pub fn default_replacement(&self) -> &'static str {
        match self {
            Self::Mrn => "[MRN]",
            Self::Ssn => "[SSN]",
            Self::Phone => "[PHONE]",
            Self::Date => "[DATE]",
            Self::Email => "[EMAIL]",
            Self::Address => "[ADDRESS]",
            Self::Name => "[PATIENT]",
        }
    }

    /// Parse a category label (case-insensitive, a few aliases accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MRN" | "MEDICAL_RECORD_NUMBER" => Some(Self::Mrn),
            "SSN" => Some(Self::Ssn),
            "PHONE" => Some(Self::Phone),
            "DATE" => Some(Self::Date),
            "EMAIL" => Some(Self::Email),
            "ADDRESS" | "LOCATION" => Some(Self::Address),
            "NAME" | "PATIENT" | "PERSON" => Some(Self::Name),
            _ => None,
        }
    }
}

impl fmt::Display for PhiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One matched PHI occurrence
///
/// `start` and `end` are half-open UTF-8 byte offsets into the scanned text
/// and always fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSpan {
    /// Category of PHI
    pub category: PhiCategory,
    /// Exact substring matched
    pub value: String,
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0), fixed per detector
    pub confidence: f32,
    /// Token substituted for the span on redaction
    pub replacement: String,
}

impl DetectedSpan {
    /// Create a span from a match in `text`
    pub fn new(
        category: PhiCategory,
        text: &str,
        start: usize,
        end: usize,
        confidence: f32,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            category,
            value: text[start..end].to_string(),
            start,
            end,
            confidence: confidence.clamp(0.0, 1.0),
            replacement: replacement.into(),
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `[start, end)` lies entirely inside this span
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && end <= self.end
    }

    /// Whether this span shares at least one byte with `other`
    pub fn overlaps(&self, other: &DetectedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Result of a single de-identification pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeidentifiedText {
    /// Identifier for correlating log events for this pass
    pub request_id: Uuid,
    /// Rewritten text
    pub text: String,
    /// Spans detected in the original text, ascending by start
    pub detections: Vec<DetectedSpan>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the pass
    pub timestamp: DateTime<Utc>,
    /// Statistics by category
    pub stats_by_category: HashMap<PhiCategory, usize>,
}

impl DeidentifiedText {
    /// Create a new result
    pub fn new(
        request_id: Uuid,
        text: String,
        detections: Vec<DetectedSpan>,
        processing_time_ms: u64,
    ) -> Self {
        let mut stats_by_category = HashMap::new();
        for detection in &detections {
            *stats_by_category.entry(detection.category).or_insert(0) += 1;
        }

        Self {
            request_id,
            text,
            detections,
            processing_time_ms,
            timestamp: Utc::now(),
            stats_by_category,
        }
    }

    /// Get total number of detections
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any PHI was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Pairs of detections from different categories that overlap
    pub fn cross_category_overlaps(&self) -> Vec<(&DetectedSpan, &DetectedSpan)> {
        let mut pairs = Vec::new();
        for (i, a) in self.detections.iter().enumerate() {
            for b in &self.detections[i + 1..] {
                if b.start >= a.end {
                    break;
                }
                if a.category != b.category && a.overlaps(b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}
