use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single out-of-range field reported by boundary validation.
///
/// Validation is opt-in: the screening pipeline itself never fails and treats
/// missing or zeroed fields as benign defaults. Callers that want to reject
/// malformed submissions before screening can run
/// [`crate::screening::validate_submission`] and surface these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub expected_min: f64,
    pub expected_max: f64,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self {
            field: field.to_string(),
            value,
            expected_min: min,
            expected_max: max,
            message: format!("{field}: value {value} is outside range [{min}, {max}]"),
        }
    }
}

/// Failure modes of the external narrative generator.
///
/// These never escape the orchestrator; they are logged and replaced with the
/// deterministic fallback summary.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative generation timed out after {0} second(s)")]
    Timeout(u64),

    #[error("narrative generator failed: {0}")]
    Generator(String),
}
