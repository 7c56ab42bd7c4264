//! Validate config command implementation

use crate::config::load_config;
use crate::deidentification::DeidentificationEngine;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loads the file, then builds the engine so that pattern libraries and
    /// name dictionaries are compiled and read as well.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let engine = match DeidentificationEngine::new(&config.detection) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Detection settings are invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        let detection = &config.detection;
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Confidence Threshold: {:.2}",
            detection.confidence_threshold
        );
        println!(
            "  Pattern Library: {}",
            detection
                .pattern_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!(
            "  Name Dictionary: {}",
            detection
                .name_dictionary
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!("  Extra Names: {}", detection.extra_names.len());

        let mut categories = engine.scanner().categories();
        categories.dedup();
        let active: Vec<&str> = categories.iter().map(|c| c.label()).collect();
        println!("  Active Categories: {}", active.join(", "));
        if !detection.disabled.is_empty() {
            println!("  Disabled Categories: {}", detection.disabled.join(", "));
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();

        Ok(0)
    }
}
