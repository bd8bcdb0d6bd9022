//! The dyslexia-subtype rule table: an explicit ordered list of
//! (label, confidence, predicate) records. Rules are evaluated independently,
//! so a submission may satisfy several; the table order decides the primary
//! type (first fires wins). Double Deficit is a derived rule handled
//! by the engine: it requires both Phonological and Rapid Naming to have
//! fired and overrides their primary picks.

use crate::config::ScreeningConfig;
use crate::screening::correlation::CorrelationMatrix;
use crate::screening::evaluators::EvaluatedMetrics;

pub const PHONOLOGICAL: &str = "Phonological Dyslexia";
pub const SURFACE: &str = "Surface Dyslexia";
pub const RAPID_NAMING: &str = "Rapid Naming Dyslexia";
pub const DOUBLE_DEFICIT: &str = "Double Deficit Dyslexia";
pub const VISUAL_ORTHOGRAPHIC: &str = "Visual (Orthographic) Dyslexia";
pub const AUDITORY: &str = "Auditory Dyslexia";
pub const DEVELOPMENTAL: &str = "Developmental Dyslexia";

pub const DOUBLE_DEFICIT_CONFIDENCE: f64 = 0.82;

/// Everything a subtype predicate may consult.
pub(crate) struct RuleContext<'a> {
    pub metrics: &'a EvaluatedMetrics,
    pub correlations: &'a CorrelationMatrix,
    pub config: &'a ScreeningConfig,
}

impl RuleContext<'_> {
    fn weak(&self) -> f64 {
        self.config.weak_signal_threshold
    }

    fn low(&self) -> f64 {
        self.config.low_accuracy_threshold
    }

    pub(crate) fn phonological_flag(&self) -> bool {
        !self.metrics.reading.phonological_issues.is_empty()
    }

    /// Visual stress or letter discrimination below the weak-signal line.
    pub(crate) fn visual_issue(&self) -> bool {
        self.metrics.visual.visual_stress_score < self.weak()
            || self.metrics.visual.discrimination_score < self.weak()
    }
}

pub(crate) struct SubtypeRule {
    pub label: &'static str,
    pub confidence: f64,
    pub predicate: fn(&RuleContext<'_>) -> bool,
}

/// Ordered by primary-type priority.
pub(crate) const SUBTYPE_RULES: &[SubtypeRule] = &[
    SubtypeRule {
        label: PHONOLOGICAL,
        confidence: 0.78,
        predicate: |ctx| {
            ctx.metrics.reading.accuracy < ctx.low()
                && ctx.metrics.spelling.accuracy < ctx.low()
                && ctx.phonological_flag()
                && ctx.correlations.reading_spelling > 0.6
        },
    },
    SubtypeRule {
        label: SURFACE,
        confidence: 0.72,
        predicate: |ctx| {
            ctx.visual_issue()
                && ctx.metrics.reading.accuracy < ctx.low()
                && ctx.metrics.spelling.orthographic_weakness > 50.0
                && !ctx.phonological_flag()
        },
    },
    SubtypeRule {
        label: RAPID_NAMING,
        confidence: 0.65,
        // A wpm of zero means no fluency sample was taken, not slow naming.
        predicate: |ctx| {
            ctx.metrics.reading.wpm > 0.0
                && ctx.metrics.reading.wpm < ctx.config.slow_wpm_threshold
                && ctx.metrics.reading.accuracy >= ctx.low()
                && ctx.metrics.reading.fluency_score < ctx.low()
        },
    },
    SubtypeRule {
        label: VISUAL_ORTHOGRAPHIC,
        confidence: 0.70,
        predicate: |ctx| {
            ctx.visual_issue()
                && ctx.metrics.visual.tracking_difficulty_index > 50.0
                && ctx.metrics.visual.crowding_score < ctx.weak()
        },
    },
    SubtypeRule {
        label: AUDITORY,
        confidence: 0.62,
        predicate: |ctx| {
            ctx.phonological_flag()
                && ctx.metrics.cognitive.working_memory_score < ctx.weak()
                && !ctx.visual_issue()
        },
    },
];
