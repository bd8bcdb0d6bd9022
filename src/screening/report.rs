//! Narrative boundary and the deterministic fallback summary.
//!
//! The narrative generator is an external collaborator; its failure or
//! timeout is absorbed here and replaced with a templated summary built
//! purely from the structured result. No classification logic lives in this
//! module.

use std::future::Future;
use std::pin::Pin;

use crate::error::NarrativeError;

use super::domain::Dimension;
use super::inference::NONE_IDENTIFIED;
use super::ScreeningOutcome;

/// External narrative-report generator. Implementations typically wrap a
/// generative text API; the engine awaits a single call with a bounded
/// timeout and never propagates its failure.
pub trait NarrativeGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        outcome: &'a ScreeningOutcome,
    ) -> Pin<Box<dyn Future<Output = Result<String, NarrativeError>> + Send + 'a>>;
}

/// Deterministic templated summary: string interpolation over the structured
/// result only.
pub fn fallback_summary(outcome: &ScreeningOutcome) -> String {
    let inference = &outcome.inference;
    let primary = inference.primary_type.as_deref().unwrap_or(NONE_IDENTIFIED);

    let mut summary = format!(
        "Screening summary for assessment {}.\nPrimary finding: {}. Overall severity: {}. Confidence: {:.0}%.\n",
        outcome.assessment_id.0,
        primary,
        inference.severity.label(),
        inference.confidence * 100.0,
    );

    summary.push_str("Dimension results:\n");
    for dimension in Dimension::ordered() {
        let entry = outcome.severity_by_dimension.get(dimension);
        summary.push_str(&format!(
            "- {}: {} ({:.0})\n",
            dimension.label(),
            entry.severity.label(),
            entry.score,
        ));
    }

    let subtypes: Vec<&str> = inference
        .dyslexia_types
        .iter()
        .map(String::as_str)
        .collect();
    if !subtypes.is_empty() {
        summary.push_str(&format!("Identified patterns: {}.\n", subtypes.join(", ")));
    }
    if !inference.adhd_indicators.is_empty() {
        summary.push_str(&format!(
            "Attention indicators: {}.\n",
            inference.adhd_indicators.join(", ")
        ));
    }
    if !outcome.recommendations.is_empty() {
        summary.push_str(&format!(
            "Recommended supports: {}.\n",
            outcome.recommendations.join(", ")
        ));
    }
    summary.push_str(
        "This screening is informational and is not a clinical diagnosis.",
    );
    summary
}
