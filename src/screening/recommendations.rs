//! Deterministic mapping from the inferred profile to a recommended set of
//! accessibility features, consumed by the presentation layer.

use super::domain::{Dimension, Severity, SeverityByDimension};
use super::inference::{
    ConditionInference, ADHD_PRIMARY, PHONOLOGICAL, SURFACE, VISUAL_ORTHOGRAPHIC,
};

/// Build the ordered, de-duplicated feature list. Empty when nothing fired
/// and every dimension screened clean.
pub fn recommend_features(
    inference: &ConditionInference,
    severities: &SeverityByDimension,
) -> Vec<String> {
    let mut features: Vec<&'static str> = Vec::new();
    let add = |feature: &'static str, features: &mut Vec<&'static str>| {
        if !features.contains(&feature) {
            features.push(feature);
        }
    };

    let has_subtype = inference
        .dyslexia_types
        .iter()
        .any(|label| label != super::inference::NONE_IDENTIFIED);
    let reading = severities.get(Dimension::ReadingAndLanguage).severity;
    let spelling = severities.get(Dimension::WritingAndSpelling).severity;
    let visual = severities.get(Dimension::VisualProcessing).severity;

    if has_subtype || reading >= Severity::Moderate {
        add("dyslexia-friendly-font", &mut features);
        add("increased-letter-spacing", &mut features);
    }
    if reading >= Severity::Moderate {
        add("text-to-speech", &mut features);
    }
    if inference.dyslexia_types.iter().any(|label| label == PHONOLOGICAL) {
        add("phonics-support", &mut features);
        add("text-to-speech", &mut features);
    }
    if visual >= Severity::Moderate
        || inference
            .dyslexia_types
            .iter()
            .any(|label| label == SURFACE || label == VISUAL_ORTHOGRAPHIC)
    {
        add("tinted-overlay", &mut features);
        add("reduced-visual-clutter", &mut features);
    }
    if spelling >= Severity::Moderate {
        add("spell-check-support", &mut features);
        add("word-prediction", &mut features);
    }
    if !inference.adhd_indicators.is_empty()
        || inference.primary_type.as_deref() == Some(ADHD_PRIMARY)
    {
        add("chunked-text", &mut features);
        add("focus-mode", &mut features);
        add("progress-timers", &mut features);
    }
    if inference
        .adhd_indicators
        .iter()
        .any(|indicator| indicator.starts_with("Working memory"))
    {
        add("step-by-step-instructions", &mut features);
    }

    features.into_iter().map(str::to_string).collect()
}
