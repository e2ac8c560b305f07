//! Weekday exposure histogram.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};

use crate::models::metrics::{HourMetrics, WeekdayHistogram};

/// Average the excess score of the valid hourly buckets per local weekday and
/// hour of day.
///
/// Weekdays are indexed 0 = Sunday through 6 = Saturday; the conversion from
/// chrono's weekday happens here so the convention cannot silently invert
/// downstream. Invalid hours are discarded, and a weekday without any valid
/// hour is absent from the result.
pub fn weekday_histogram(hours: &[HourMetrics]) -> WeekdayHistogram {
    let mut accumulators: BTreeMap<(u8, u8), (f64, u32)> = BTreeMap::new();
    for metrics in hours {
        let Some(stats) = metrics.stats else {
            continue;
        };
        let weekday = metrics.hour.weekday().num_days_from_sunday() as u8;
        let hour_of_day = metrics.hour.hour() as u8;
        let entry = accumulators.entry((weekday, hour_of_day)).or_insert((0.0, 0));
        entry.0 += stats.excess_score;
        entry.1 += 1;
    }

    let mut histogram: BTreeMap<u8, BTreeMap<u8, f64>> = BTreeMap::new();
    for ((weekday, hour_of_day), (sum, count)) in accumulators {
        histogram
            .entry(weekday)
            .or_default()
            .insert(hour_of_day, sum / f64::from(count));
    }
    WeekdayHistogram(histogram)
}
