//! Result type alias for phi-scrub

use super::errors::ScrubError;

/// Result type alias for phi-scrub operations
///
/// # Examples
///
/// ```
/// use phi_scrub::domain::result::Result;
/// use phi_scrub::domain::errors::ScrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;
