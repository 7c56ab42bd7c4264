//! De-identification engine
//!
//! This module provides the [`DeidentificationEngine`] that wires a configured
//! [`Scanner`] to the [`Redactor`] and records diagnostics for each pass.
//!
//! # Examples
//!
//! ```
//! use phi_scrub::deidentification::{DeidentificationEngine, config::DetectionConfig};
//!
//! # fn example() -> phi_scrub::domain::Result<()> {
//! let engine = DeidentificationEngine::new(&DetectionConfig::default())?;
//!
//! let clean = engine.deidentify("Patient MRN: AB123456 SSN 123-45-6789");
//! assert_eq!(clean, "Patient MRN: [MRN] SSN [SSN]");
//! # Ok(())
//! # }
//! ```

use crate::deidentification::{
    config::DetectionConfig,
    detector::{patterns::PatternRegistry, NameDictionary, NameSource},
    models::{DeidentifiedText, DetectedSpan},
    redactor::Redactor,
    report::ScanReport,
    scanner::Scanner,
};
use crate::domain::Result;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Main de-identification engine
///
/// # Thread Safety
///
/// The engine holds its scanner behind an `Arc` and is cheap to clone. Every
/// call is independent, so clones can serve concurrent requests.
#[derive(Clone)]
pub struct DeidentificationEngine {
    scanner: Arc<Scanner>,
    redactor: Redactor,
}

impl DeidentificationEngine {
    /// Create a new engine from detection configuration
    ///
    /// Loads the custom pattern library and name dictionary when configured,
    /// otherwise uses the built-in ones.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library cannot be read or compiled
    /// - The name dictionary cannot be read
    pub fn new(config: &DetectionConfig) -> Result<Self> {
        config.validate()?;

        let registry = match config.pattern_library {
            Some(ref path) => {
                tracing::info!(path = %path.display(), "Loading custom pattern library");
                Arc::new(PatternRegistry::from_file(path)?)
            }
            None => PatternRegistry::default_patterns(),
        };

        let mut dictionary = match config.name_dictionary {
            Some(ref path) => {
                tracing::info!(path = %path.display(), "Loading name dictionary");
                NameDictionary::from_file(path)?
            }
            None => NameDictionary::common_first_names(),
        };
        dictionary.extend(&config.extra_names);

        tracing::debug!(
            patterns = registry.all_patterns().len(),
            names = dictionary.len(),
            confidence_threshold = config.confidence_threshold,
            "Building scanner"
        );

        let mut builder = Scanner::builder()
            .registry(registry)
            .name_source(Arc::new(dictionary))
            .confidence_threshold(config.confidence_threshold);
        for category in config.disabled_categories()? {
            builder = builder.disable(category);
        }

        Ok(Self::with_scanner(builder.build()))
    }

    /// Create an engine around an already-built scanner
    pub fn with_scanner(scanner: Scanner) -> Self {
        Self {
            scanner: Arc::new(scanner),
            redactor: Redactor::new(),
        }
    }

    /// Detect PHI spans in `text`, ascending by start
    pub fn detect(&self, text: &str) -> Vec<DetectedSpan> {
        self.scanner.scan(text)
    }

    /// Replace all detected PHI in `text` with placeholder tokens
    pub fn deidentify(&self, text: &str) -> String {
        let spans = self.detect(text);
        self.redactor.redact(text, &spans)
    }

    /// Replace the given spans in `text`
    ///
    /// When `spans` is `None` the text is scanned first.
    pub fn redact(&self, text: &str, spans: Option<&[DetectedSpan]>) -> String {
        match spans {
            Some(spans) => self.redactor.redact(text, spans),
            None => self.deidentify(text),
        }
    }

    /// De-identify `text` and return the detections alongside the result
    pub fn deidentify_detailed(&self, text: &str) -> DeidentifiedText {
        let start = Instant::now();
        let request_id = Uuid::new_v4();

        let detections = self.detect(text);
        let rewritten = self.redactor.redact(text, &detections);
        let processing_time = start.elapsed().as_millis() as u64;

        crate::log_scan_complete!(request_id, detections.len(), start.elapsed());

        DeidentifiedText::new(request_id, rewritten, detections, processing_time)
    }

    /// De-identify a batch of texts concurrently
    ///
    /// Each text is processed on tokio's blocking pool. Results are returned in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker task panics or is cancelled. No partial
    /// results are returned in that case.
    pub async fn deidentify_batch(&self, texts: Vec<String>) -> Result<Vec<DeidentifiedText>> {
        let handles: Vec<_> = texts
            .into_iter()
            .map(|text| {
                let engine = self.clone();
                tokio::task::spawn_blocking(move || engine.deidentify_detailed(&text))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for joined in futures::future::join_all(handles).await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    crate::log_error_with_context!(&e, "De-identification task failed");
                    return Err(e.into());
                }
            }
        }

        Ok(results)
    }

    /// De-identify a batch and build a [`ScanReport`] over it
    pub async fn deidentify_batch_with_report(
        &self,
        texts: Vec<String>,
    ) -> Result<(Vec<DeidentifiedText>, ScanReport)> {
        let results = self.deidentify_batch(texts).await?;

        let mut report = ScanReport::new();
        for result in &results {
            report.add_text(result);
        }

        Ok((results, report))
    }

    /// The scanner used by this engine
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }
}

impl Default for DeidentificationEngine {
    fn default() -> Self {
        Self::with_scanner(Scanner::new())
    }
}

impl std::fmt::Debug for DeidentificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeidentificationEngine")
            .field("scanner", &self.scanner)
            .finish()
    }
}
