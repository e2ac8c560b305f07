//! Hourly aggregation of the uniform series.

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::models::metrics::{HourMetrics, MAX_HOUR_GAP_S, MAX_HOUR_MISSING, SECONDS_PER_HOUR};
use crate::models::series::UniformSeries;
use crate::models::time;
use crate::services::stats::exposure_stats;

/// Reduce a month's uniform series into per-clock-hour summary statistics.
///
/// Only complete hours are represented: the incomplete hours at the start or
/// end of a sampling interval are dropped entirely rather than emitted as
/// invalid. Within a complete hour a single missing sample is tolerated; with
/// more, the hour keeps its gap accounting but carries no statistics. With a
/// 10-minute rate the statistics are computed over 6 samples per hour (which
/// is not that much).
pub fn hourly_metrics(series: &UniformSeries, threshold_ppm: f64) -> Vec<HourMetrics> {
    let rate_s = series.rate_s();

    let mut hours: BTreeMap<DateTime<Tz>, Vec<Option<f64>>> = BTreeMap::new();
    for point in series.iter() {
        hours
            .entry(time::floor_to_hour(&point.bucket_start))
            .or_default()
            .push(point.co2_ppm);
    }

    hours
        .into_iter()
        .filter_map(|(hour, values)| {
            let row_count = values.len() as u32;
            if row_count * rate_s != SECONDS_PER_HOUR {
                return None;
            }

            let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
            let missing_count = row_count - present.len() as u32;
            let gap_duration_s = missing_count * rate_s;

            let stats = (gap_duration_s <= MAX_HOUR_GAP_S && missing_count <= MAX_HOUR_MISSING)
                .then(|| {
                    exposure_stats(
                        &present,
                        rate_s,
                        threshold_ppm,
                        SECONDS_PER_HOUR - gap_duration_s,
                    )
                });

            Some(HourMetrics {
                hour: hour.naive_local(),
                gap_duration_s,
                stats,
            })
        })
        .collect()
}
