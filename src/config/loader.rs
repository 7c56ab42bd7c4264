//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScrubConfig;
use crate::domain::errors::ScrubError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ScrubConfig
/// 4. Applies environment variable overrides (PHI_SCRUB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is
/// unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use phi_scrub::config::loader::load_config;
///
/// let config = load_config("phi-scrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ScrubConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScrubError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScrubError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Same pipeline as [`load_config`] without touching the filesystem.
pub fn parse_config(contents: &str) -> Result<ScrubConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ScrubConfig = toml::from_str(&contents)
        .map_err(|e| ScrubError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ScrubError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = ENV_PLACEHOLDER.replace_all(line, |cap: &regex::Captures| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScrubError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PHI_SCRUB_* prefix
///
/// Variables follow the pattern PHI_SCRUB_<SECTION>_<KEY>, for example
/// PHI_SCRUB_APPLICATION_LOG_LEVEL or PHI_SCRUB_LOGGING_LOCAL_PATH.
fn apply_env_overrides(config: &mut ScrubConfig) -> Result<()> {
    if let Ok(val) = std::env::var("PHI_SCRUB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config.detection.apply_env_overrides()?;

    if let Ok(val) = std::env::var("PHI_SCRUB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PHI_SCRUB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PHI_SCRUB_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
