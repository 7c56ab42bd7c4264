//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = crate::cli::DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include every option with explanatory comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing phi-scrub configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: phi-scrub validate-config");
                println!("  3. Scrub a note: phi-scrub deidentify --input note.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# phi-scrub configuration

[application]
log_level = "info"

[detection]
confidence_threshold = 0.0
disabled = []
extra_names = []

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# phi-scrub configuration
#
# Values of the form ${VAR} are replaced from the environment when loaded.
# Every key can also be overridden with PHI_SCRUB_<SECTION>_<KEY>.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Detection Settings
# ============================================================================
[detection]
# Detectors whose fixed confidence is below this value are not run (0.0-1.0).
# Built-in confidences: SSN 0.98, MRN 0.95, EMAIL 0.90, PHONE 0.85,
# DATE 0.80, ADDRESS 0.75, NAME 0.60
confidence_threshold = 0.0

# Categories to skip: MRN, SSN, PHONE, DATE, EMAIL, ADDRESS, NAME
disabled = []

# Custom pattern library replacing the built-in rules
# pattern_library = "patterns/phi_patterns.toml"

# Name dictionary, one name per line; '#' starts a comment
# name_dictionary = "${PHI_SCRUB_NAMES_FILE}"

# Names added on top of the dictionary
extra_names = []

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to local files
local_enabled = false

# Directory for log files
local_path = "logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
