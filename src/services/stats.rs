//! Shared per-bucket statistics computation.

use crate::models::metrics::ExposureStats;

/// Compute the conditionally-defined statistics of a bucket from its present
/// sample values.
///
/// `covered_s` is the non-gap portion of the bucket; callers only invoke this
/// once they have established that it is positive.
pub(crate) fn exposure_stats(
    values: &[f64],
    rate_s: u32,
    threshold_ppm: f64,
    covered_s: u32,
) -> ExposureStats {
    let max_co2_ppm = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_co2_ppm = values.iter().sum::<f64>() / values.len() as f64;

    let excess: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v >= threshold_ppm)
        .collect();
    let excess_duration_s = excess.len() as u32 * rate_s;
    let mean_excess_co2_ppm = if excess.is_empty() {
        0.0
    } else {
        excess.iter().map(|v| v - threshold_ppm).sum::<f64>() / excess.len() as f64
    };
    let excess_rate = f64::from(excess_duration_s) / f64::from(covered_s);

    ExposureStats {
        max_co2_ppm,
        mean_co2_ppm,
        excess_duration_s,
        mean_excess_co2_ppm,
        excess_rate,
        excess_score: mean_excess_co2_ppm * excess_rate,
    }
}
