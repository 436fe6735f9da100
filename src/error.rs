//! Engine error taxonomy
//!
//! All three conditions are derived from the request input alone, so none of
//! them is ever worth retrying: the same input produces the same error.

/// Errors returned by the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// A profile field is outside its declared domain or numeric range.
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Scoring was requested against a catalog with zero entries.
    #[error("crop catalog is empty")]
    EmptyCatalog,

    /// Yield adjustments drove the predicted yield below zero.
    #[error("predicted yield is negative ({predicted:.2} q/acre){}", crop_suffix(.crop))]
    NegativeYield { crop: Option<String>, predicted: f64 },
}

fn crop_suffix(crop: &Option<String>) -> String {
    match crop {
        Some(name) => format!(" for {}", name),
        None => String::new(),
    }
}

impl ScoringError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScoringError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Always false. Retrying with identical input yields the identical error.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
