//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON log file with daily or hourly rotation
//! - Level taken from configuration, overridable with `RUST_LOG`
//!
//! Log events carry categories, counts and offsets only. Matched PHI values
//! are never logged.
//!
//! # Example
//!
//! ```no_run
//! use phi_scrub::config::LoggingConfig;
//! use phi_scrub::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a scan
///
/// # Example
///
/// ```no_run
/// use phi_scrub::log_scan_complete;
/// use std::time::Duration;
/// use uuid::Uuid;
///
/// log_scan_complete!(Uuid::new_v4(), 3, Duration::from_millis(2));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($request_id:expr, $count:expr, $duration:expr) => {
        tracing::debug!(
            request_id = %$request_id,
            detections = $count,
            duration_us = $duration.as_micros() as u64,
            "Scan completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use phi_scrub::log_error_with_context;
/// use phi_scrub::domain::ScrubError;
///
/// let error = ScrubError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::ScrubError;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_scan_complete!(Uuid::new_v4(), 2usize, Duration::from_millis(5));

        let error = ScrubError::Validation("bad span".to_string());
        log_error_with_context!(&error, "redaction");
    }
}
