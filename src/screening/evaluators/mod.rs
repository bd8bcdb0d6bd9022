//! Per-test evaluators: pure transforms from one raw test payload to an
//! evaluated metrics record. These encapsulate all genuinely algorithmic
//! per-test scoring; reading and spelling are thin restructurings of fields
//! already analyzed upstream.

pub(crate) mod cognitive;
pub(crate) mod literacy;
pub(crate) mod visual;

use serde::{Deserialize, Serialize};

use crate::config::ScreeningConfig;

use super::domain::AssessmentSubmission;

pub use cognitive::evaluate_cognitive;
pub use literacy::{evaluate_reading, evaluate_spelling};
pub use visual::evaluate_visual;

/// Derived scores from the memory-sequence test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveMetrics {
    pub working_memory_score: f64,
    pub attention_score: f64,
    pub task_switching_score: f64,
    pub cognitive_load_score: f64,
    pub executive_function_score: f64,
    pub error_patterns: Vec<String>,
    pub indicators: Vec<String>,
}

/// Derived scores from the letter-search test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMetrics {
    pub pattern_recognition_score: f64,
    pub visual_stress_score: f64,
    pub tracking_difficulty_index: f64,
    pub crowding_score: f64,
    pub discrimination_score: f64,
    pub indicators: Vec<String>,
}

/// Restructured passage-reading analysis plus derived fluency/decoding scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingMetrics {
    pub accuracy: f64,
    pub wpm: f64,
    pub fluency_score: f64,
    pub decoding_score: f64,
    pub phonological_issues: Vec<String>,
    pub visual_issues: Vec<String>,
    pub indicators: Vec<String>,
}

/// Restructured spelling-dictation analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingMetrics {
    pub accuracy: f64,
    pub orthographic_weakness: f64,
    pub phoneme_grapheme_mismatch: f64,
    pub error_classifications: Vec<String>,
    pub indicators: Vec<String>,
}

/// All four evaluated metric records for one submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedMetrics {
    pub cognitive: CognitiveMetrics,
    pub visual: VisualMetrics,
    pub reading: ReadingMetrics,
    pub spelling: SpellingMetrics,
}

/// Run all four evaluators over one submission.
pub fn evaluate_all(config: &ScreeningConfig, submission: &AssessmentSubmission) -> EvaluatedMetrics {
    EvaluatedMetrics {
        cognitive: evaluate_cognitive(config, &submission.cognitive),
        visual: evaluate_visual(config, &submission.visual),
        reading: evaluate_reading(config, &submission.reading),
        spelling: evaluate_spelling(config, &submission.spelling),
    }
}
