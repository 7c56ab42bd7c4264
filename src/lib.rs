//! # phi-scrub - PHI scanner and redactor
//!
//! phi-scrub finds protected health information in clinical free text and
//! replaces it with category tokens before the text leaves a trust boundary,
//! for example before a prompt is sent to a third-party model endpoint.
//!
//! ## Overview
//!
//! - **Detecting** MRNs, SSNs, phone numbers, dates, email addresses, street
//!   addresses and dictionary-matched first names
//! - **Redacting** every detected span with a token such as `[SSN]`
//! - **Checking** that the destination endpoint and database connection
//!   encrypt traffic
//!
//! ## Architecture
//!
//! - [`deidentification`] - Pattern registry, detectors, scanner, redactor, engine
//! - [`compliance`] - Transport checks for endpoints and connection strings
//! - [`config`] - Configuration management
//! - [`domain`] - Error and result types
//! - [`logging`] - Structured logging and observability
//! - [`cli`] - Command-line interface and argument parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use phi_scrub::{deidentify, detect};
//!
//! let note = "Patient MRN: AB123456 SSN 123-45-6789";
//!
//! let spans = detect(note);
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].value, "AB123456");
//!
//! assert_eq!(deidentify(note), "Patient MRN: [MRN] SSN [SSN]");
//! ```
//!
//! ## Configured Engine
//!
//! ```rust,no_run
//! use phi_scrub::config::load_config;
//! use phi_scrub::deidentification::DeidentificationEngine;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("phi-scrub.toml")?;
//! let engine = DeidentificationEngine::new(&config.detection)?;
//!
//! let result = engine.deidentify_detailed("Call 555-123-4567");
//! println!("{} ({} spans)", result.text, result.total_detections());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Scanning and redaction never fail. Loading configuration, pattern
//! libraries and name dictionaries returns [`domain::Result`] with a
//! [`domain::ScrubError`].

pub mod cli;
pub mod compliance;
pub mod config;
pub mod deidentification;
pub mod domain;
pub mod logging;

pub use compliance::{is_encryption_enforced, is_secure_endpoint};
pub use deidentification::{deidentify, detect, DetectedSpan, PhiCategory};
