//! Cross-dimension correlation: detects pairwise co-occurrence of weak
//! signals and emits fixed-constant evidentiary strengths. These corroborate
//! the condition inference; they never alter dimension severities.

use serde::{Deserialize, Serialize};

use crate::config::ScreeningConfig;

use super::evaluators::EvaluatedMetrics;

/// Pairwise correlation strengths in [0, 1]. Zero means no corroborating
/// signal was found; nonzero values are rule constants, not statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    pub cognitive_visual: f64,
    pub cognitive_reading: f64,
    pub cognitive_spelling: f64,
    pub visual_reading: f64,
    pub visual_spelling: f64,
    pub reading_spelling: f64,
}

pub fn correlate(config: &ScreeningConfig, metrics: &EvaluatedMetrics) -> CorrelationMatrix {
    let weak = config.weak_signal_threshold;
    let low = config.low_accuracy_threshold;

    let cognitive = &metrics.cognitive;
    let visual = &metrics.visual;
    let reading = &metrics.reading;
    let spelling = &metrics.spelling;

    let cognitive_visual = if cognitive.executive_function_score < weak
        && visual.pattern_recognition_score < weak
    {
        0.70
    } else {
        0.0
    };

    let cognitive_reading =
        if cognitive.working_memory_score < weak && reading.accuracy < low {
            0.80
        } else {
            0.0
        };

    let cognitive_spelling = if cognitive.attention_score < weak && spelling.accuracy < low {
        0.60
    } else {
        0.0
    };

    let visual_reading = if visual.visual_stress_score < weak && reading.fluency_score < low {
        0.75
    } else {
        0.0
    };

    let visual_spelling = if visual.discrimination_score < weak && spelling.accuracy < low {
        0.70
    } else {
        0.0
    };

    let reading_spelling = if reading.accuracy < low && spelling.accuracy < low {
        0.90
    } else if has_phonological_flags(reading, spelling) {
        0.85
    } else {
        0.0
    };

    CorrelationMatrix {
        cognitive_visual,
        cognitive_reading,
        cognitive_spelling,
        visual_reading,
        visual_spelling,
        reading_spelling,
    }
}

/// Phonological-issue flags present on both the reading and spelling side.
fn has_phonological_flags(
    reading: &super::evaluators::ReadingMetrics,
    spelling: &super::evaluators::SpellingMetrics,
) -> bool {
    !reading.phonological_issues.is_empty()
        && spelling
            .error_classifications
            .iter()
            .any(|classification| classification.to_lowercase().contains("phonological"))
}
