//! CLI interface and argument parsing

pub mod commands;

use crate::config::{load_config, ScrubConfig};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "phi-scrub.toml";

/// phi-scrub - PHI scanner and redactor for clinical free text
#[derive(Parser, Debug)]
#[command(name = "phi-scrub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "PHI_SCRUB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PHI_SCRUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List PHI spans found in the input
    Detect(commands::detect::DetectArgs),

    /// Replace PHI in the input with category tokens
    Deidentify(commands::deidentify::DeidentifyArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Load the configuration, falling back to defaults when the file is absent
///
/// A missing file is fine: the built-in patterns and dictionary apply. A file
/// that exists but fails to parse or validate is an error.
pub fn load_config_or_default(path: &str) -> crate::domain::Result<ScrubConfig> {
    if Path::new(path).exists() {
        load_config(path)
    } else {
        tracing::debug!(config_path = %path, "No configuration file, using defaults");
        Ok(ScrubConfig::default())
    }
}

/// Read the whole input from a file, or stdin when no file is given
pub fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Write output to a file, or stdout when no file is given
pub fn write_output(output: Option<&PathBuf>, contents: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
