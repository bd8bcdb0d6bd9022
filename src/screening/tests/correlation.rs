use super::common::*;
use crate::config::ScreeningConfig;
use crate::screening::correlation::correlate;
use crate::screening::evaluators;

fn correlations_for(
    submission: &crate::screening::domain::AssessmentSubmission,
) -> crate::screening::correlation::CorrelationMatrix {
    let config = ScreeningConfig::default();
    let metrics = evaluators::evaluate_all(&config, submission);
    correlate(&config, &metrics)
}

#[test]
fn clean_profile_yields_no_correlations() {
    let correlations = correlations_for(&clean_submission("no-corr"));
    assert_eq!(correlations, Default::default());
}

#[test]
fn joint_low_literacy_accuracy_correlates_strongest() {
    let correlations = correlations_for(&phonological_submission("literacy"));
    assert!((correlations.reading_spelling - 0.90).abs() < f64::EPSILON);
    // Cognitive and visual performance is clean, so nothing else fires.
    assert!((correlations.cognitive_reading - 0.0).abs() < f64::EPSILON);
    assert!((correlations.visual_spelling - 0.0).abs() < f64::EPSILON);
}

#[test]
fn phonological_flags_on_both_sides_correlate_without_low_accuracy() {
    let mut submission = phonological_submission("flags-only");
    submission.reading.accuracy_percent = 75.0;
    submission.spelling.accuracy_percent = 72.0;

    let correlations = correlations_for(&submission);
    assert!((correlations.reading_spelling - 0.85).abs() < f64::EPSILON);
}

#[test]
fn weak_working_memory_with_low_reading_accuracy_correlates() {
    let mut submission = cognitive_weak_submission("wm-read");
    submission.reading.accuracy_percent = 55.0;

    let correlations = correlations_for(&submission);
    assert!((correlations.cognitive_reading - 0.80).abs() < f64::EPSILON);
}

#[test]
fn visual_stress_with_halting_fluency_correlates() {
    let mut submission = visual_weak_submission("stress-fluency");
    submission.reading.accuracy_percent = 50.0;
    submission.reading.wpm = 95.0;

    let correlations = correlations_for(&submission);
    assert!((correlations.visual_reading - 0.75).abs() < f64::EPSILON);
    assert!((correlations.visual_spelling - 0.0).abs() < f64::EPSILON);
}

#[test]
fn attention_and_discrimination_gates_require_low_spelling() {
    let mut submission = cognitive_weak_submission("att-spell");
    submission.visual = visual_weak_submission("att-spell").visual;
    submission.spelling.accuracy_percent = 60.0;

    let correlations = correlations_for(&submission);
    assert!((correlations.cognitive_spelling - 0.60).abs() < f64::EPSILON);
    assert!((correlations.visual_spelling - 0.70).abs() < f64::EPSILON);
}

#[test]
fn executive_and_pattern_weakness_correlate() {
    let mut submission = cognitive_weak_submission("exec-vis");
    submission.visual.accuracy = 40.0;

    let correlations = correlations_for(&submission);
    assert!((correlations.cognitive_visual - 0.70).abs() < f64::EPSILON);
}
