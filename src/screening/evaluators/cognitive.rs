use super::CognitiveMetrics;
use crate::config::ScreeningConfig;
use crate::screening::domain::CognitiveResult;

/// Longest sequence offered by the memory test; reaching it scores 100.
const MAX_SEQUENCE_LENGTH: f64 = 8.0;
/// Assigned when no response-time samples were captured.
const DEFAULT_TASK_SWITCHING: f64 = 75.0;

/// Score the memory-sequence test: working memory span, attention,
/// task-switching stability, cognitive load, and a composite executive
/// function score, plus recall error patterns.
pub fn evaluate_cognitive(config: &ScreeningConfig, result: &CognitiveResult) -> CognitiveMetrics {
    let working_memory_score =
        (f64::from(result.max_length_reached) / MAX_SEQUENCE_LENGTH * 100.0).min(100.0);

    // Attention is the pass-through response accuracy.
    let attention_score = result.accuracy;

    // High timing variance means unstable switching between recall items.
    let task_switching_score = if result.response_times.is_empty() {
        DEFAULT_TASK_SWITCHING
    } else {
        (100.0 - response_time_variance(&result.response_times) * 10.0).max(0.0)
    };

    let cognitive_load_score =
        100.0 - (result.accuracy * 0.6 + (100.0 - working_memory_score) * 0.4);

    let executive_function_score =
        working_memory_score * 0.4 + attention_score * 0.3 + task_switching_score * 0.3;

    let error_patterns = detect_error_patterns(&result.sequence, &result.user_sequence);

    let mut indicators = Vec::new();
    if working_memory_score < config.weak_signal_threshold {
        indicators.push("Working memory difficulty".to_string());
    }
    if attention_score < config.weak_signal_threshold {
        indicators.push("Attention difficulty".to_string());
    }
    if task_switching_score < config.weak_signal_threshold {
        indicators.push("Task-switching difficulty".to_string());
    }
    if cognitive_load_score > config.high_load_threshold {
        indicators.push("High cognitive load".to_string());
    }

    CognitiveMetrics {
        working_memory_score,
        attention_score,
        task_switching_score,
        cognitive_load_score,
        executive_function_score,
        error_patterns,
        indicators,
    }
}

fn response_time_variance(samples: &[f64]) -> f64 {
    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    samples
        .iter()
        .map(|sample| (sample - mean).powi(2))
        .sum::<f64>()
        / count
}

/// Classify how the recalled sequence diverges from the shown sequence.
fn detect_error_patterns(shown: &[String], recalled: &[String]) -> Vec<String> {
    let mut patterns = Vec::new();
    if shown.is_empty() {
        return patterns;
    }

    // Adjacent pair recalled in swapped order relative to the shown sequence.
    let transposed = recalled.windows(2).enumerate().any(|(index, pair)| {
        shown.get(index).zip(shown.get(index + 1)).is_some_and(
            |(first, second)| pair[0] == *second && pair[1] == *first,
        )
    });
    if transposed {
        patterns.push("Transposition".to_string());
    }

    if shown.len() >= 4 {
        let head_correct = (0..2).all(|index| recalled.get(index) == shown.get(index));
        let tail_correct = (shown.len() - 2..shown.len())
            .all(|index| recalled.get(index) == shown.get(index));
        if head_correct && !tail_correct {
            patterns.push("Primacy Effect".to_string());
        }
        if tail_correct && !head_correct {
            patterns.push("Recency Effect".to_string());
        }
    }

    if recalled.len() < shown.len() {
        patterns.push("Omissions".to_string());
    } else if recalled.len() > shown.len() {
        patterns.push("Intrusions".to_string());
    }

    patterns
}
