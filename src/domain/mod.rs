//! Domain error and result types.
//!
//! All fallible library operations return [`Result<T>`], which uses
//! [`ScrubError`] as the error type:
//!
//! ```rust
//! use phi_scrub::domain::{Result, ScrubError};
//!
//! fn check(threshold: f32) -> Result<()> {
//!     if !(0.0..=1.0).contains(&threshold) {
//!         return Err(ScrubError::Validation(format!("bad threshold {threshold}")));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::ScrubError;
pub use result::Result;
