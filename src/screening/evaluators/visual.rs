use super::VisualMetrics;
use crate::config::ScreeningConfig;
use crate::screening::domain::VisualResult;

const HIGH_TRACKING_DIFFICULTY: f64 = 50.0;
/// Seconds beyond which the letter search is considered slow.
const SLOW_TIME_SECS: f64 = 90.0;

/// Score the letter-search test: visual stress, tracking difficulty,
/// crowding sensitivity, and discrimination.
pub fn evaluate_visual(config: &ScreeningConfig, result: &VisualResult) -> VisualMetrics {
    let hits = f64::from(result.hits);
    let false_positives = f64::from(result.false_positives);

    // False selections per correct target, as a percentage. With no correct
    // targets on record any false positive zeroes the score outright.
    let false_positive_rate = if result.correct_count > 0 {
        false_positives / f64::from(result.correct_count) * 100.0
    } else if result.false_positives > 0 {
        f64::INFINITY
    } else {
        0.0
    };
    let slow_time_penalty = if result.time_elapsed > SLOW_TIME_SECS {
        20.0
    } else {
        0.0
    };
    let visual_stress_score = (100.0 - (false_positive_rate * 2.0 + slow_time_penalty)).max(0.0);

    // Hits per minute; below one per second of search counts as laborious.
    let efficiency = if result.time_elapsed > 0.0 {
        hits / result.time_elapsed * 60.0
    } else {
        0.0
    };
    let efficiency_penalty = if efficiency < 1.0 { 30.0 } else { 0.0 };
    let tracking_difficulty_index =
        (100.0 - (result.accuracy * 0.7 + efficiency_penalty)).max(0.0);

    let selections = hits + false_positives;
    let error_rate = if selections > 0.0 {
        false_positives / selections
    } else {
        0.0
    };
    let crowding_score = (100.0 - error_rate * 150.0).max(0.0);

    let discrimination_score = result.accuracy;
    let pattern_recognition_score = result.accuracy;

    let mut indicators = Vec::new();
    if visual_stress_score < config.weak_signal_threshold {
        indicators.push("Visual stress".to_string());
    }
    if tracking_difficulty_index > HIGH_TRACKING_DIFFICULTY {
        indicators.push("Tracking difficulty".to_string());
    }
    if crowding_score < config.weak_signal_threshold {
        indicators.push("Visual crowding".to_string());
    }
    if discrimination_score < config.weak_signal_threshold {
        indicators.push("Letter discrimination difficulty".to_string());
    }

    VisualMetrics {
        pattern_recognition_score,
        visual_stress_score,
        tracking_difficulty_index,
        crowding_score,
        discrimination_score,
        indicators,
    }
}
