//! The monthly clean-air-medal gate.

use crate::config::AnalysisConfig;
use crate::models::metrics::{DayMetrics, Qualification};

/// Decide from a month's daily statistics whether the clean-air medal is
/// awarded.
///
/// A pure, total function: it never fails, and a month without any day
/// buckets yields [`Qualification::Indeterminate`] rather than a refusal.
/// The rules are evaluated in a fixed order, first match wins:
///
/// 1. fewer than the required fraction of days are valid — too little
///    reliable data;
/// 2. some valid day reached the bad-air threshold;
/// 3. some valid day's excess score was too severe;
/// 4. the admissible fraction of excess days was reached;
/// 5. otherwise, awarded.
pub fn clean_air_medal(days: &[DayMetrics], config: &AnalysisConfig) -> Qualification {
    let total_count = days.len();
    if total_count == 0 {
        return Qualification::Indeterminate;
    }

    let valid: Vec<&DayMetrics> = days.iter().filter(|d| d.is_valid()).collect();
    let valid_count = valid.len();

    // Rule 1: the metrics lose their meaning when too many days lack data.
    if (valid_count as f64) / (total_count as f64) < config.valid_day_rate_required {
        return Qualification::NotAwarded;
    }

    // Rule 2: the bad-air threshold must never be reached, not even once in
    // the entire month.
    if valid
        .iter()
        .any(|d| d.stats.is_some_and(|s| s.max_co2_ppm >= config.bad_air_threshold_ppm))
    {
        return Qualification::NotAwarded;
    }

    // Rule 3: no day may exceed the clean-air threshold too severely on
    // average.
    if valid
        .iter()
        .any(|d| d.stats.is_some_and(|s| s.excess_score >= config.excess_score_threshold))
    {
        return Qualification::NotAwarded;
    }

    // Rule 4: the clean-air threshold may be exceeded on at most the
    // admissible fraction of days. The score is non-negative for every valid
    // day, so the literal `>= 0` comparison counts them all.
    let excess_day_count = valid
        .iter()
        .filter(|d| d.stats.is_some_and(|s| s.excess_score >= 0.0))
        .count();
    if excess_day_count as f64 >= config.excess_rate_admissible * valid_count as f64 {
        return Qualification::NotAwarded;
    }

    Qualification::Awarded
}
