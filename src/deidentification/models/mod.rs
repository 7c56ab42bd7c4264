//! Data models for PHI detection

pub mod span;

pub use span::{DeidentifiedText, DetectedSpan, PhiCategory};
