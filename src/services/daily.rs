//! Daily aggregation of the uniform series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::metrics::{DayMetrics, SECONDS_PER_DAY};
use crate::models::series::UniformSeries;
use crate::services::stats::exposure_stats;

/// Reduce a month's uniform series into per-local-day summary statistics.
///
/// Each day present in the series yields one bucket. Missing time is charged
/// both for interior masked samples and for the shortfall of a day only
/// partially covered by the queried range; the statistics themselves exist
/// only when the day holds any data at all. With a 10-minute rate a full day
/// covers 144 samples.
pub fn daily_metrics(series: &UniformSeries, threshold_ppm: f64) -> Vec<DayMetrics> {
    let rate_s = series.rate_s();

    let mut days: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
    for point in series.iter() {
        days.entry(point.bucket_start.date_naive())
            .or_default()
            .push(point.co2_ppm);
    }

    days.into_iter()
        .map(|(day, values)| {
            let row_count = values.len() as u32;
            let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
            let missing_count = row_count - present.len() as u32;

            let actual_duration_s = row_count * rate_s;
            let shortfall_s = SECONDS_PER_DAY.saturating_sub(actual_duration_s);
            let gap_duration_s = missing_count * rate_s + shortfall_s;

            let stats = (gap_duration_s < SECONDS_PER_DAY).then(|| {
                exposure_stats(
                    &present,
                    rate_s,
                    threshold_ppm,
                    SECONDS_PER_DAY - gap_duration_s,
                )
            });

            DayMetrics {
                day,
                duration_s: SECONDS_PER_DAY,
                gap_duration_s,
                stats,
            }
        })
        .collect()
}
