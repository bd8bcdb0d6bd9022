use super::common::*;
use crate::config::ScreeningConfig;
use crate::screening::domain::{CognitiveResult, ReadingResult, VisualResult};
use crate::screening::evaluators::{evaluate_cognitive, evaluate_reading, evaluate_visual};

#[test]
fn working_memory_scales_with_sequence_span() {
    let submission = cognitive_weak_submission("cog-weak");
    let metrics = evaluate_cognitive(&config(), &submission.cognitive);

    assert!((metrics.working_memory_score - 50.0).abs() < f64::EPSILON);
    assert!((metrics.attention_score - 40.0).abs() < f64::EPSILON);
    assert!(metrics
        .indicators
        .iter()
        .any(|indicator| indicator == "Working memory difficulty"));
    assert!(metrics
        .indicators
        .iter()
        .any(|indicator| indicator == "Attention difficulty"));
}

#[test]
fn working_memory_caps_at_full_span() {
    let result = CognitiveResult {
        max_length_reached: 12,
        ..CognitiveResult::default()
    };
    let metrics = evaluate_cognitive(&config(), &result);
    assert!((metrics.working_memory_score - 100.0).abs() < f64::EPSILON);
}

#[test]
fn task_switching_defaults_without_samples_and_penalizes_variance() {
    let no_samples = CognitiveResult::default();
    let defaulted = evaluate_cognitive(&config(), &no_samples);
    assert!((defaulted.task_switching_score - 75.0).abs() < f64::EPSILON);

    let erratic = cognitive_weak_submission("erratic");
    let metrics = evaluate_cognitive(&config(), &erratic.cognitive);
    assert!(
        metrics.task_switching_score < 60.0,
        "high timing variance should pull task switching below 60, got {}",
        metrics.task_switching_score
    );

    let steady = clean_submission("steady");
    let steady_metrics = evaluate_cognitive(&config(), &steady.cognitive);
    assert!(steady_metrics.task_switching_score > 95.0);
}

#[test]
fn high_load_indicator_respects_configured_threshold() {
    let submission = clean_submission("load-threshold");

    // Clean cognitive results carry a load of 46, under the default 70.
    let relaxed = evaluate_cognitive(&config(), &submission.cognitive);
    assert!(!relaxed.indicators.iter().any(|i| i == "High cognitive load"));

    let strict = ScreeningConfig {
        high_load_threshold: 40.0,
        ..ScreeningConfig::default()
    };
    let metrics = evaluate_cognitive(&strict, &submission.cognitive);
    assert!(metrics.indicators.iter().any(|i| i == "High cognitive load"));
}

#[test]
fn recall_error_patterns_are_classified() {
    let transposed = CognitiveResult {
        sequence: letters(&["a", "b", "c", "d"]),
        user_sequence: letters(&["b", "a", "c", "d"]),
        ..CognitiveResult::default()
    };
    let metrics = evaluate_cognitive(&config(), &transposed);
    assert!(metrics.error_patterns.iter().any(|p| p == "Transposition"));

    let truncated = CognitiveResult {
        sequence: letters(&["2", "8", "5", "1"]),
        user_sequence: letters(&["2", "8"]),
        ..CognitiveResult::default()
    };
    let metrics = evaluate_cognitive(&config(), &truncated);
    assert!(metrics.error_patterns.iter().any(|p| p == "Primacy Effect"));
    assert!(metrics.error_patterns.iter().any(|p| p == "Omissions"));

    let padded = CognitiveResult {
        sequence: letters(&["4", "1", "6", "3"]),
        user_sequence: letters(&["9", "7", "6", "3", "2"]),
        ..CognitiveResult::default()
    };
    let metrics = evaluate_cognitive(&config(), &padded);
    assert!(metrics.error_patterns.iter().any(|p| p == "Intrusions"));

    let perfect = CognitiveResult {
        sequence: letters(&["1", "2", "3", "4"]),
        user_sequence: letters(&["1", "2", "3", "4"]),
        ..CognitiveResult::default()
    };
    assert!(evaluate_cognitive(&config(), &perfect).error_patterns.is_empty());
}

#[test]
fn recency_effect_flags_preserved_tail() {
    let result = CognitiveResult {
        sequence: letters(&["4", "1", "6", "3"]),
        user_sequence: letters(&["9", "9", "6", "3"]),
        ..CognitiveResult::default()
    };
    let metrics = evaluate_cognitive(&config(), &result);
    assert!(metrics.error_patterns.iter().any(|p| p == "Recency Effect"));
    assert!(!metrics.error_patterns.iter().any(|p| p == "Primacy Effect"));
}

#[test]
fn crowded_slow_visual_search_is_heavily_penalized() {
    let submission = visual_weak_submission("vis-weak");
    let metrics = evaluate_visual(&config(), &submission.visual);

    assert!(
        metrics.crowding_score < 40.0,
        "crowding should be low, got {}",
        metrics.crowding_score
    );
    // Both the false-positive rate and the slow-time penalty apply.
    assert!((metrics.visual_stress_score - 0.0).abs() < f64::EPSILON);
    assert!(metrics.tracking_difficulty_index > 50.0);
    assert!(metrics.indicators.iter().any(|i| i == "Visual crowding"));
    assert!(metrics.indicators.iter().any(|i| i == "Visual stress"));
}

#[test]
fn accurate_fast_visual_search_scores_clean() {
    let submission = clean_submission("vis-clean");
    let metrics = evaluate_visual(&config(), &submission.visual);

    assert!(metrics.visual_stress_score >= 85.0);
    assert!(metrics.crowding_score > 90.0);
    assert!(metrics.indicators.is_empty());
}

#[test]
fn visual_scores_survive_empty_payload() {
    let metrics = evaluate_visual(&config(), &VisualResult::default());
    assert!((metrics.crowding_score - 100.0).abs() < f64::EPSILON);
    assert!((metrics.discrimination_score - 0.0).abs() < f64::EPSILON);
}

#[test]
fn fluency_blends_speed_and_accuracy() {
    let submission = clean_submission("fluent");
    let metrics = evaluate_reading(&config(), &submission.reading);
    // 180 wpm normalizes to 90; 90*0.4 + 92*0.6.
    assert!((metrics.fluency_score - 91.2).abs() < 1e-9);
    assert!((metrics.decoding_score - 92.0).abs() < f64::EPSILON);
    assert!(metrics.indicators.is_empty());
}

#[test]
fn decoding_penalty_is_capped() {
    let result = ReadingResult {
        accuracy_percent: 80.0,
        phonological_issues: (0..10).map(|i| format!("issue-{i}")).collect(),
        ..ReadingResult::default()
    };
    let metrics = evaluate_reading(&config(), &result);
    // Ten issues would deduct 50; the penalty caps at 30.
    assert!((metrics.decoding_score - 50.0).abs() < f64::EPSILON);
}
