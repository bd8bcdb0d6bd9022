//! Converts evaluated metrics into comparable 0-100 sub-scores per dimension.
//! Pure and total: every score is clamped before being exposed, and inverted
//! indices (tracking difficulty, orthographic weakness, phoneme-grapheme
//! mismatch) are flipped so that higher always means stronger performance.

use serde::{Deserialize, Serialize};

use super::evaluators::EvaluatedMetrics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveScores {
    pub overall: f64,
    pub working_memory: f64,
    pub attention: f64,
    pub task_switching: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualScores {
    pub overall: f64,
    pub stress: f64,
    pub tracking: f64,
    pub discrimination: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingScores {
    pub overall: f64,
    pub fluency: f64,
    pub decoding: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingScores {
    pub overall: f64,
    pub orthographic: f64,
    pub phoneme_grapheme: f64,
}

/// Per-dimension normalized sub-scores, all clamped to [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScores {
    pub cognitive: CognitiveScores,
    pub visual: VisualScores,
    pub reading: ReadingScores,
    pub spelling: SpellingScores,
}

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Normalize all four metric records into comparable sub-scores.
pub fn normalize(metrics: &EvaluatedMetrics) -> NormalizedScores {
    NormalizedScores {
        cognitive: CognitiveScores {
            overall: clamp(metrics.cognitive.executive_function_score),
            working_memory: clamp(metrics.cognitive.working_memory_score),
            attention: clamp(metrics.cognitive.attention_score),
            task_switching: clamp(metrics.cognitive.task_switching_score),
        },
        visual: VisualScores {
            overall: clamp(metrics.visual.pattern_recognition_score),
            stress: clamp(metrics.visual.visual_stress_score),
            tracking: clamp(100.0 - metrics.visual.tracking_difficulty_index),
            discrimination: clamp(metrics.visual.discrimination_score),
        },
        reading: ReadingScores {
            overall: clamp(metrics.reading.accuracy),
            fluency: clamp(metrics.reading.fluency_score),
            decoding: clamp(metrics.reading.decoding_score),
        },
        spelling: SpellingScores {
            overall: clamp(metrics.spelling.accuracy),
            orthographic: clamp(100.0 - metrics.spelling.orthographic_weakness),
            phoneme_grapheme: clamp(100.0 - metrics.spelling.phoneme_grapheme_mismatch),
        },
    }
}
