use serde::{Deserialize, Serialize};

/// Threshold configuration for the screening engine.
///
/// The defaults carry the fixed constants the rule tables were written
/// against; injecting a custom config is supported for calibration studies
/// but the engine is normally constructed with [`ScreeningConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningConfig {
    /// Sub-scores below this are treated as a weak signal (evaluator
    /// indicators, correlation gates, inference predicates).
    pub weak_signal_threshold: f64,
    /// Reading/spelling accuracy below this counts as low for correlation
    /// gates and subtype rules.
    pub low_accuracy_threshold: f64,
    /// Cognitive load above this fires the high-load indicator.
    pub high_load_threshold: f64,
    /// Words-per-minute below this counts as slow naming speed.
    pub slow_wpm_threshold: f64,
    /// Severity bands, inclusive lower bounds.
    pub no_difficulty_floor: f64,
    pub mild_floor: f64,
    pub moderate_floor: f64,
    /// Heuristic confidence is capped here; it is not a calibrated
    /// probability.
    pub confidence_cap: f64,
    /// Bound on the single outbound narrative-generation call.
    pub narrative_timeout_secs: u64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            weak_signal_threshold: 60.0,
            low_accuracy_threshold: 70.0,
            high_load_threshold: 70.0,
            slow_wpm_threshold: 80.0,
            no_difficulty_floor: 85.0,
            mild_floor: 70.0,
            moderate_floor: 50.0,
            confidence_cap: 0.95,
            narrative_timeout_secs: 10,
        }
    }
}
