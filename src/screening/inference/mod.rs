//! Condition inference: applies the ordered subtype rule table, accumulates
//! attention/executive-function indicators, and settles the overall severity
//! and confidence for one screening run.

mod rules;

pub use rules::{
    AUDITORY, DEVELOPMENTAL, DOUBLE_DEFICIT, PHONOLOGICAL, RAPID_NAMING, SURFACE,
    VISUAL_ORTHOGRAPHIC,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScreeningConfig;

use super::correlation::CorrelationMatrix;
use super::domain::{Severity, SeverityByDimension};
use super::evaluators::EvaluatedMetrics;
use super::normalizer::NormalizedScores;
use rules::{RuleContext, DOUBLE_DEFICIT_CONFIDENCE, SUBTYPE_RULES};

pub const ADHD_PRIMARY: &str = "ADHD-related indicators";
pub const NONE_IDENTIFIED: &str = "None identified";

/// The inferred condition profile for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInference {
    pub dyslexia_types: Vec<String>,
    pub adhd_indicators: Vec<String>,
    pub primary_type: Option<String>,
    pub severity: Severity,
    pub confidence: f64,
}

/// Run the full inference pass. Never fails; rules only raise confidence
/// (via `max`) and the result is capped at the configured ceiling.
pub(crate) fn infer(
    config: &ScreeningConfig,
    metrics: &EvaluatedMetrics,
    normalized: &NormalizedScores,
    correlations: &CorrelationMatrix,
    severities: &SeverityByDimension,
) -> ConditionInference {
    let ctx = RuleContext {
        metrics,
        correlations,
        config,
    };

    let mut dyslexia_types = Vec::new();
    let mut primary_type: Option<String> = None;
    let mut confidence: f64 = 0.0;

    for rule in SUBTYPE_RULES {
        if (rule.predicate)(&ctx) {
            debug!(label = rule.label, confidence = rule.confidence, "subtype rule fired");
            dyslexia_types.push(rule.label.to_string());
            confidence = confidence.max(rule.confidence);
            if primary_type.is_none() {
                primary_type = Some(rule.label.to_string());
            }
        }
    }

    // Double Deficit requires both constituent deficits to have fired on
    // their own, and overrides either as the primary pick.
    let phonological_fired = dyslexia_types.iter().any(|label| label == PHONOLOGICAL);
    let rapid_naming_fired = dyslexia_types.iter().any(|label| label == RAPID_NAMING);
    if phonological_fired && rapid_naming_fired {
        debug!("double deficit override");
        dyslexia_types.push(DOUBLE_DEFICIT.to_string());
        confidence = confidence.max(DOUBLE_DEFICIT_CONFIDENCE);
        primary_type = Some(DOUBLE_DEFICIT.to_string());
    }

    // Screening assumes developmental origin; there is no acquired-dyslexia
    // detection path.
    if !dyslexia_types.is_empty() {
        dyslexia_types.push(DEVELOPMENTAL.to_string());
    }

    let adhd_indicators = collect_adhd_indicators(config, metrics, &mut confidence);

    if primary_type.is_none() && !adhd_indicators.is_empty() {
        primary_type = Some(ADHD_PRIMARY.to_string());
    }

    let nothing_fired = dyslexia_types.is_empty() && adhd_indicators.is_empty();

    // Overall severity: the worst per-dimension classification is the floor,
    // then the weighted average score may escalate or, when the run is
    // clean, override it.
    let floor = severities.worst();
    let average = normalized.reading.overall * 0.25
        + normalized.spelling.overall * 0.25
        + normalized.visual.overall * 0.2
        + normalized.cognitive.overall * 0.15
        + normalized.reading.fluency * 0.15;

    let mut severity = floor;
    if average < config.moderate_floor {
        severity = Severity::Severe;
    } else if average < config.mild_floor && severity == Severity::NoSignificantDifficulty {
        // A floor already at Mild or worse is left unescalated.
        severity = Severity::Moderate;
    }
    if average >= config.no_difficulty_floor && nothing_fired {
        severity = Severity::NoSignificantDifficulty;
    }

    if nothing_fired && average >= config.mild_floor {
        dyslexia_types.push(NONE_IDENTIFIED.to_string());
        confidence = confidence.max(0.6);
    }

    ConditionInference {
        dyslexia_types,
        adhd_indicators,
        primary_type,
        severity,
        confidence: confidence.min(config.confidence_cap),
    }
}

fn collect_adhd_indicators(
    config: &ScreeningConfig,
    metrics: &EvaluatedMetrics,
    confidence: &mut f64,
) -> Vec<String> {
    let weak = config.weak_signal_threshold;
    let low = config.low_accuracy_threshold;
    let cognitive = &metrics.cognitive;

    let mut indicators = Vec::new();
    if cognitive.attention_score < weak {
        indicators.push("Inattention".to_string());
    }
    if cognitive.task_switching_score < weak {
        indicators.push("Task-switching difficulty".to_string());
    }
    if cognitive.executive_function_score < weak {
        indicators.push("Executive function difficulty".to_string());
    }
    if !cognitive.error_patterns.is_empty() {
        indicators.push("Working memory / sequencing".to_string());
    }

    let learning_pattern = cognitive.attention_score < weak
        && cognitive.task_switching_score < weak
        && (metrics.reading.accuracy < low || metrics.spelling.accuracy < low);
    if learning_pattern {
        indicators.push("ADHD-related learning pattern".to_string());
        *confidence = confidence.max(0.68);
    }

    indicators
}
