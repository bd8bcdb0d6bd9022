//! Per-dimension severity classification from weighted composites of the
//! evaluated metrics.

use crate::config::ScreeningConfig;

use super::domain::{DimensionSeverity, Severity, SeverityByDimension};
use super::evaluators::EvaluatedMetrics;

/// No auditory test exists yet; the dimension carries a fixed neutral
/// placeholder rather than a fabricated signal.
pub const AUDITORY_PLACEHOLDER_SCORE: f64 = 75.0;

/// Map a composite score onto the ordered severity bands (inclusive lower
/// bounds).
pub fn severity_for_score(config: &ScreeningConfig, score: f64) -> Severity {
    if score >= config.no_difficulty_floor {
        Severity::NoSignificantDifficulty
    } else if score >= config.mild_floor {
        Severity::Mild
    } else if score >= config.moderate_floor {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}

/// Classify all five dimensions. Weights within each composite sum to 1.0.
pub fn classify_dimensions(
    config: &ScreeningConfig,
    metrics: &EvaluatedMetrics,
) -> SeverityByDimension {
    let reading_score = metrics.reading.accuracy * 0.5
        + metrics.reading.fluency_score * 0.3
        + metrics.reading.decoding_score * 0.2;

    let spelling_score = metrics.spelling.accuracy * 0.6
        + (100.0 - metrics.spelling.orthographic_weakness) * 0.2
        + (100.0 - metrics.spelling.phoneme_grapheme_mismatch) * 0.2;

    let visual_score = metrics.visual.pattern_recognition_score * 0.4
        + metrics.visual.visual_stress_score * 0.3
        + (100.0 - metrics.visual.tracking_difficulty_index) * 0.3;

    let cognitive_score = metrics.cognitive.executive_function_score * 0.4
        + metrics.cognitive.attention_score * 0.3
        + metrics.cognitive.task_switching_score * 0.3;

    SeverityByDimension {
        reading_and_language: classify(config, reading_score),
        writing_and_spelling: classify(config, spelling_score),
        visual_processing: classify(config, visual_score),
        auditory_processing: classify(config, AUDITORY_PLACEHOLDER_SCORE),
        cognitive_and_attention: classify(config, cognitive_score),
    }
}

fn classify(config: &ScreeningConfig, score: f64) -> DimensionSeverity {
    let score = score.clamp(0.0, 100.0);
    DimensionSeverity {
        severity: severity_for_score(config, score),
        score,
    }
}
