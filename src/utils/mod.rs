//! Utility modules for farm scoring
//!
//! Contains shared functionality used across multiple metrics:
//! - Calibration: Tunable adjustment constants
//! - Labels: Free-text label parsing for enumerated fields

pub mod calibration;
pub mod labels;

// Re-export commonly used types
pub use calibration::ScoringConstants;
pub use labels::{canonical_label, parse_label, Labelled};
