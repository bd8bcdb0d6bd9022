use crate::config::ScreeningConfig;
use crate::screening::domain::{
    AssessmentId, AssessmentSubmission, CognitiveResult, ReadingResult, SpellingResult,
    VisualResult,
};
use crate::screening::ScreeningEngine;

pub(super) fn engine() -> ScreeningEngine {
    ScreeningEngine::new(ScreeningConfig::default())
}

pub(super) fn config() -> ScreeningConfig {
    ScreeningConfig::default()
}

pub(super) fn letters(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// A submission with complete, comfortably-passing data on every test.
pub(super) fn clean_submission(id: &str) -> AssessmentSubmission {
    AssessmentSubmission {
        assessment_id: AssessmentId(id.to_string()),
        reading: ReadingResult {
            accuracy_percent: 92.0,
            wpm: 180.0,
            phonological_issues: Vec::new(),
            visual_issues: Vec::new(),
            error_type: None,
            dyslexia_likelihood: 0.1,
        },
        spelling: SpellingResult {
            accuracy_percent: 90.0,
            orthographic_weakness: 10.0,
            phoneme_grapheme_mismatch: 10.0,
            error_types: Vec::new(),
            error_classifications: Vec::new(),
        },
        visual: VisualResult {
            hits: 18,
            false_positives: 1,
            correct_count: 20,
            selected_count: 19,
            time_elapsed: 60.0,
            accuracy: 90.0,
            target: Some("b".to_string()),
        },
        cognitive: CognitiveResult {
            correct: 9,
            total: 10,
            time_elapsed: 75.0,
            accuracy: 90.0,
            max_length_reached: 8,
            sequence: letters(&["3", "9", "1", "7"]),
            user_sequence: letters(&["3", "9", "1", "7"]),
            response_times: vec![1.1, 1.2, 1.0, 1.1],
        },
    }
}

/// The profile from the phonological screening scenario: weak reading and
/// spelling accuracy with phonological flags on both sides.
pub(super) fn phonological_submission(id: &str) -> AssessmentSubmission {
    let mut submission = clean_submission(id);
    submission.reading.accuracy_percent = 50.0;
    submission.reading.wpm = 95.0;
    submission.reading.phonological_issues = letters(&["ship→sip"]);
    submission.spelling.accuracy_percent = 45.0;
    submission.spelling.phoneme_grapheme_mismatch = 70.0;
    submission.spelling.error_classifications = letters(&["phonological substitution"]);
    submission
}

/// Weak cognitive profile: short memory span, low accuracy, erratic timing.
pub(super) fn cognitive_weak_submission(id: &str) -> AssessmentSubmission {
    let mut submission = clean_submission(id);
    submission.cognitive.max_length_reached = 4;
    submission.cognitive.accuracy = 40.0;
    submission.cognitive.response_times = vec![0.5, 4.0, 0.8, 5.5];
    submission.cognitive.sequence = letters(&["2", "8", "5", "1"]);
    submission.cognitive.user_sequence = letters(&["2", "8"]);
    submission
}

/// Weak visual profile: heavy false-positive rate on a slow search.
pub(super) fn visual_weak_submission(id: &str) -> AssessmentSubmission {
    let mut submission = clean_submission(id);
    submission.visual.hits = 3;
    submission.visual.false_positives = 9;
    submission.visual.correct_count = 3;
    submission.visual.selected_count = 12;
    submission.visual.time_elapsed = 120.0;
    submission.visual.accuracy = 30.0;
    submission
}
