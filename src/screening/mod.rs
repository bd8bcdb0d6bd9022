//! The holistic screening pipeline: per-test evaluation, normalization,
//! severity classification, cross-correlation, condition inference, and
//! accessibility recommendations, assembled into one structured outcome.

pub mod correlation;
pub mod domain;
pub mod evaluators;
pub mod inference;
pub mod normalizer;
pub mod recommendations;
pub mod report;
pub mod severity;
pub mod validate;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use crate::config::ScreeningConfig;

pub use correlation::CorrelationMatrix;
pub use domain::{
    AssessmentId, AssessmentSubmission, CognitiveResult, Dimension, DimensionSeverity,
    ReadingResult, Severity, SeverityByDimension, SpellingResult, VisualResult,
};
pub use evaluators::{
    CognitiveMetrics, EvaluatedMetrics, ReadingMetrics, SpellingMetrics, VisualMetrics,
};
pub use inference::ConditionInference;
pub use normalizer::{
    CognitiveScores, NormalizedScores, ReadingScores, SpellingScores, VisualScores,
};
pub use report::NarrativeGenerator;
pub use validate::validate_submission;

/// Raw payload, evaluated metrics, and normalized sub-scores for one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveReport {
    pub raw: CognitiveResult,
    pub metrics: CognitiveMetrics,
    pub normalized: CognitiveScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualReport {
    pub raw: VisualResult,
    pub metrics: VisualMetrics,
    pub normalized: VisualScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingReport {
    pub raw: ReadingResult,
    pub metrics: ReadingMetrics,
    pub normalized: ReadingScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingReport {
    pub raw: SpellingResult,
    pub metrics: SpellingMetrics,
    pub normalized: SpellingScores,
}

/// The terminal structured result for one assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningOutcome {
    pub assessment_id: AssessmentId,
    pub cognitive: CognitiveReport,
    pub visual: VisualReport,
    pub reading: ReadingReport,
    pub spelling: SpellingReport,
    pub correlations: CorrelationMatrix,
    pub severity_by_dimension: SeverityByDimension,
    pub inference: ConditionInference,
    pub recommendations: Vec<String>,
    pub summary: String,
}

/// Stateless engine applying the screening configuration to submissions.
/// Safe to share and to invoke concurrently for independent assessments.
pub struct ScreeningEngine {
    config: ScreeningConfig,
}

impl ScreeningEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Run the full synchronous pipeline. Pure: identical submissions yield
    /// identical outcomes, and no step can fail.
    pub fn screen(&self, submission: &AssessmentSubmission) -> ScreeningOutcome {
        let metrics = evaluators::evaluate_all(&self.config, submission);
        let normalized = normalizer::normalize(&metrics);
        let severity_by_dimension = severity::classify_dimensions(&self.config, &metrics);
        let correlations = correlation::correlate(&self.config, &metrics);
        debug!(
            reading_spelling = correlations.reading_spelling,
            cognitive_reading = correlations.cognitive_reading,
            "correlation pass complete"
        );

        let inference = inference::infer(
            &self.config,
            &metrics,
            &normalized,
            &correlations,
            &severity_by_dimension,
        );
        info!(
            primary = inference.primary_type.as_deref().unwrap_or("none"),
            severity = inference.severity.label(),
            confidence = inference.confidence,
            "screening classified"
        );

        let recommendations =
            recommendations::recommend_features(&inference, &severity_by_dimension);

        let mut outcome = ScreeningOutcome {
            assessment_id: submission.assessment_id.clone(),
            cognitive: CognitiveReport {
                raw: submission.cognitive.clone(),
                metrics: metrics.cognitive,
                normalized: normalized.cognitive,
            },
            visual: VisualReport {
                raw: submission.visual.clone(),
                metrics: metrics.visual,
                normalized: normalized.visual,
            },
            reading: ReadingReport {
                raw: submission.reading.clone(),
                metrics: metrics.reading,
                normalized: normalized.reading,
            },
            spelling: SpellingReport {
                raw: submission.spelling.clone(),
                metrics: metrics.spelling,
                normalized: normalized.spelling,
            },
            correlations,
            severity_by_dimension,
            inference,
            recommendations,
            summary: String::new(),
        };
        outcome.summary = report::fallback_summary(&outcome);
        outcome
    }

    /// Screen, then ask the external generator for a narrative summary. On
    /// failure or timeout the deterministic fallback summary is kept and the
    /// error is never propagated.
    pub async fn screen_with_narrative(
        &self,
        submission: &AssessmentSubmission,
        generator: &dyn NarrativeGenerator,
    ) -> ScreeningOutcome {
        let mut outcome = self.screen(submission);
        let bound = Duration::from_secs(self.config.narrative_timeout_secs);
        match timeout(bound, generator.generate(&outcome)).await {
            Ok(Ok(narrative)) => outcome.summary = narrative,
            Ok(Err(err)) => {
                warn!(error = %err, "narrative generation failed; using fallback summary");
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.narrative_timeout_secs,
                    "narrative generation timed out; using fallback summary"
                );
            }
        }
        outcome
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}
