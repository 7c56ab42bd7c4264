//! Transport safeguards for de-identified text
//!
//! Scrubbed text still leaves the process, usually to a model endpoint or a
//! database. These checks answer whether the destination is protected in
//! transit. Both fail closed: anything that cannot be parsed is rejected.
//!
//! ```rust
//! use phi_scrub::compliance::{is_encryption_enforced, is_secure_endpoint};
//!
//! assert!(is_secure_endpoint("https://api.example.com/v1"));
//! assert!(!is_secure_endpoint("http://api.example.com/v1"));
//!
//! assert!(is_encryption_enforced("Server=db;Encrypt=True;"));
//! assert!(!is_encryption_enforced("Server=db;Encrypt=False;"));
//! ```

pub mod encryption;
pub mod endpoint;

pub use encryption::is_encryption_enforced;
pub use endpoint::is_secure_endpoint;
