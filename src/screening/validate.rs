//! Opt-in boundary validation. The screening pipeline never rejects input;
//! callers that want to surface malformed submissions before scoring can run
//! this and report the collected errors.

use crate::error::ValidationError;

use super::domain::AssessmentSubmission;

/// Check every percentage-like field against its documented range. Returns
/// an empty list for a well-formed submission.
pub fn validate_submission(submission: &AssessmentSubmission) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let percent_fields = [
        ("reading.accuracyPercent", submission.reading.accuracy_percent),
        ("spelling.accuracyPercent", submission.spelling.accuracy_percent),
        (
            "spelling.orthographicWeakness",
            submission.spelling.orthographic_weakness,
        ),
        (
            "spelling.phonemeGraphemeMismatch",
            submission.spelling.phoneme_grapheme_mismatch,
        ),
        ("visual.accuracy", submission.visual.accuracy),
        ("cognitive.accuracy", submission.cognitive.accuracy),
    ];
    for (field, value) in percent_fields {
        check_range(&mut errors, field, value, 0.0, 100.0);
    }

    check_range(
        &mut errors,
        "reading.dyslexiaLikelihood",
        submission.reading.dyslexia_likelihood,
        0.0,
        1.0,
    );

    let non_negative = [
        ("reading.wpm", submission.reading.wpm),
        ("visual.timeElapsed", submission.visual.time_elapsed),
        ("cognitive.timeElapsed", submission.cognitive.time_elapsed),
    ];
    for (field, value) in non_negative {
        check_range(&mut errors, field, value, 0.0, f64::MAX);
    }

    for (index, sample) in submission.cognitive.response_times.iter().enumerate() {
        if *sample < 0.0 || !sample.is_finite() {
            errors.push(ValidationError::out_of_range(
                &format!("cognitive.responseTimes[{index}]"),
                *sample,
                0.0,
                f64::MAX,
            ));
        }
    }

    if submission.visual.hits > submission.visual.selected_count {
        errors.push(ValidationError::out_of_range(
            "visual.hits",
            f64::from(submission.visual.hits),
            0.0,
            f64::from(submission.visual.selected_count),
        ));
    }

    errors
}

fn check_range(errors: &mut Vec<ValidationError>, field: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max || !value.is_finite() {
        errors.push(ValidationError::out_of_range(field, value, min, max));
    }
}
