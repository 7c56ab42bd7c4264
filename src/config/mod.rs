//! Configuration management for phi-scrub.
//!
//! TOML configuration with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PHI_SCRUB_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use phi_scrub::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("phi-scrub.toml")?;
//! println!("Confidence threshold: {}", config.detection.confidence_threshold);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [detection]
//! confidence_threshold = 0.0
//! disabled = []
//! pattern_library = "patterns/phi_patterns.toml"
//! name_dictionary = "${PHI_SCRUB_NAMES_FILE}"
//! extra_names = ["Thaddeus"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use crate::deidentification::config::DetectionConfig;
pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, LoggingConfig, ScrubConfig};
