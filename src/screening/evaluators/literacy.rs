use super::{ReadingMetrics, SpellingMetrics};
use crate::config::ScreeningConfig;
use crate::screening::domain::{ReadingResult, SpellingResult};

const HIGH_WEAKNESS: f64 = 50.0;
/// Words per minute treated as full fluency.
const FLUENT_WPM: f64 = 200.0;
/// Each phonological issue deducts this much from decoding, capped at 30.
const PHONOLOGICAL_PENALTY: f64 = 5.0;
const MAX_PHONOLOGICAL_PENALTY: f64 = 30.0;

/// Restructure the upstream passage-reading analysis and derive fluency and
/// decoding scores from it.
pub fn evaluate_reading(config: &ScreeningConfig, result: &ReadingResult) -> ReadingMetrics {
    let normalized_wpm = (result.wpm / FLUENT_WPM * 100.0).min(100.0);
    let fluency_score = normalized_wpm * 0.4 + result.accuracy_percent * 0.6;

    let phonological_penalty =
        (PHONOLOGICAL_PENALTY * result.phonological_issues.len() as f64)
            .min(MAX_PHONOLOGICAL_PENALTY);
    let decoding_score = (result.accuracy_percent - phonological_penalty).max(0.0);

    let mut indicators = Vec::new();
    if result.accuracy_percent < config.low_accuracy_threshold {
        indicators.push("Reading accuracy difficulty".to_string());
    }
    if fluency_score < config.low_accuracy_threshold {
        indicators.push("Reading fluency difficulty".to_string());
    }
    if decoding_score < config.weak_signal_threshold {
        indicators.push("Decoding difficulty".to_string());
    }

    ReadingMetrics {
        accuracy: result.accuracy_percent,
        wpm: result.wpm,
        fluency_score,
        decoding_score,
        phonological_issues: result.phonological_issues.clone(),
        visual_issues: result.visual_issues.clone(),
        indicators,
    }
}

/// Restructure the upstream spelling-dictation analysis.
pub fn evaluate_spelling(config: &ScreeningConfig, result: &SpellingResult) -> SpellingMetrics {
    let mut indicators = Vec::new();
    if result.accuracy_percent < config.low_accuracy_threshold {
        indicators.push("Spelling accuracy difficulty".to_string());
    }
    if result.orthographic_weakness > HIGH_WEAKNESS {
        indicators.push("Orthographic processing weakness".to_string());
    }
    if result.phoneme_grapheme_mismatch > HIGH_WEAKNESS {
        indicators.push("Phoneme-grapheme mapping difficulty".to_string());
    }

    SpellingMetrics {
        accuracy: result.accuracy_percent,
        orthographic_weakness: result.orthographic_weakness,
        phoneme_grapheme_mismatch: result.phoneme_grapheme_mismatch,
        error_classifications: result.error_classifications.clone(),
        indicators,
    }
}
