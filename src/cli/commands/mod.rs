//! CLI command implementations

pub mod deidentify;
pub mod detect;
pub mod init;
pub mod validate;

use crate::deidentification::DeidentificationEngine;
use crate::domain::ScrubError;

/// Build the engine for a command, mapping failures to exit codes
///
/// Configuration, pattern and dictionary problems exit with 2, anything else
/// with 5.
pub(crate) fn build_engine(config_path: &str) -> Result<DeidentificationEngine, i32> {
    let engine = super::load_config_or_default(config_path)
        .and_then(|config| DeidentificationEngine::new(&config.detection));

    engine.map_err(|e| {
        crate::log_error_with_context!(&e, "Failed to build de-identification engine");
        eprintln!("❌ {e}");
        match e {
            ScrubError::Configuration(_) | ScrubError::Pattern(_) | ScrubError::Dictionary(_) => 2,
            _ => 5,
        }
    })
}
