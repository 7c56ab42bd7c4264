//! PHI detection and de-identification
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Pattern registry**: ordered, compiled regex rules per PHI category
//! - **Detectors**: one per rule, plus a dictionary-based name detector
//! - **Scanner**: runs detectors in priority order and sorts the spans
//! - **Redactor**: splices replacement tokens into the text right-to-left
//! - **Engine**: configured facade with batch processing and reporting
//!
//! # Usage
//!
//! ```rust
//! use phi_scrub::deidentification::{deidentify, detect, PhiCategory};
//!
//! let text = "Contact John at john.doe@example.com or 555-123-4567";
//! let spans = detect(text);
//! assert_eq!(spans.len(), 3);
//! assert!(spans.iter().any(|s| s.category == PhiCategory::Name));
//!
//! assert_eq!(deidentify(text), "Contact [PATIENT] at [EMAIL] or [PHONE]");
//! ```

pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod redactor;
pub mod report;
pub mod scanner;

use once_cell::sync::Lazy;

pub use config::DetectionConfig;
pub use engine::DeidentificationEngine;
pub use models::{DeidentifiedText, DetectedSpan, PhiCategory};
pub use redactor::Redactor;
pub use report::ScanReport;
pub use scanner::Scanner;

static DEFAULT_ENGINE: Lazy<DeidentificationEngine> = Lazy::new(DeidentificationEngine::default);

/// Detect PHI in `text` with the built-in patterns and name dictionary
pub fn detect(text: &str) -> Vec<DetectedSpan> {
    DEFAULT_ENGINE.detect(text)
}

/// De-identify `text` with the built-in patterns and name dictionary
pub fn deidentify(text: &str) -> String {
    DEFAULT_ENGINE.deidentify(text)
}
