//! Per-bucket statistics and monthly assessment outcomes.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Maximum accumulated gap duration for a day's metrics to be valid.
pub const MAX_DAY_GAP_S: u32 = 3600;
/// Maximum accumulated gap duration for an hour's metrics to be valid: only
/// one grid sample may be amiss.
pub const MAX_HOUR_GAP_S: u32 = 600;
/// Number of missing grid samples tolerated within a valid hour.
pub const MAX_HOUR_MISSING: u32 = 1;

pub const SECONDS_PER_DAY: u32 = 86_400;
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// The statistics of a bucket that are only defined when the bucket holds
/// enough data.
///
/// Kept behind an `Option` on the bucket types rather than as sentinel
/// numbers, so "no data" stays distinguishable from "zero excess" — the
/// qualification rules depend on that distinction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureStats {
    /// Highest concentration observed in the bucket.
    pub max_co2_ppm: f64,
    /// Mean concentration over the present samples.
    pub mean_co2_ppm: f64,
    /// Time spent at or above the clean-air threshold.
    pub excess_duration_s: u32,
    /// Mean concentration above the threshold, over the exceeding samples;
    /// zero when nothing exceeded.
    pub mean_excess_co2_ppm: f64,
    /// Fraction of the covered (non-gap) time spent in excess.
    pub excess_rate: f64,
    /// Severity blend of magnitude and duration of exceedance:
    /// `mean_excess_co2_ppm * excess_rate`.
    pub excess_score: f64,
}

/// Summary statistics for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMetrics {
    /// The local date this bucket describes.
    pub day: NaiveDate,
    /// Nominal duration of the day in seconds. Kept at 86400 verbatim, leap
    /// and DST days included.
    pub duration_s: u32,
    /// Total missing time within the day, including the shortfall of a day
    /// only partially covered by the queried range.
    pub gap_duration_s: u32,
    /// Present only when the day holds any data at all.
    pub stats: Option<ExposureStats>,
}

impl DayMetrics {
    /// Whether the day's statistics are trustworthy: at most one hour of
    /// missing data.
    pub fn is_valid(&self) -> bool {
        self.gap_duration_s <= MAX_DAY_GAP_S
    }

    /// Whether the day holds any data at all. A valid day always does.
    pub fn has_samples(&self) -> bool {
        self.gap_duration_s < self.duration_s
    }

    /// Fraction of the day covered by data.
    pub fn gap_rate(&self) -> f64 {
        1.0 - f64::from(self.gap_duration_s) / f64::from(self.duration_s)
    }
}

/// Summary statistics for one complete local clock hour.
///
/// Partial boundary hours are never represented: the hourly aggregator drops
/// them instead of emitting an invalid bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourMetrics {
    /// Local wall-clock start of the hour.
    pub hour: NaiveDateTime,
    /// Total missing time within the hour.
    pub gap_duration_s: u32,
    /// Present only when the hour is valid (at most one missing sample).
    pub stats: Option<ExposureStats>,
}

impl HourMetrics {
    /// Whether the hour's statistics are trustworthy.
    pub fn is_valid(&self) -> bool {
        self.stats.is_some()
    }

    pub fn gap_rate(&self) -> f64 {
        1.0 - f64::from(self.gap_duration_s) / f64::from(SECONDS_PER_HOUR)
    }
}

/// The monthly clean-air verdict.
///
/// `Indeterminate` (no day buckets at all in the window) is a distinct value,
/// never conflated with `NotAwarded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    Awarded,
    NotAwarded,
    Indeterminate,
}

impl Qualification {
    /// The boolean outcome, or `None` when there was no data to judge.
    pub fn awarded(&self) -> Option<bool> {
        match self {
            Qualification::Awarded => Some(true),
            Qualification::NotAwarded => Some(false),
            Qualification::Indeterminate => None,
        }
    }
}

/// Average excess score per weekday and hour of day, built from valid hourly
/// buckets only.
///
/// Weekdays are indexed 0 = Sunday through 6 = Saturday; a weekday without a
/// single valid hour in the month is absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayHistogram(pub BTreeMap<u8, BTreeMap<u8, f64>>);

impl WeekdayHistogram {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Average excess score for the given weekday and hour, if any valid
    /// hour bucket contributed to it.
    pub fn get(&self, weekday: u8, hour: u8) -> Option<f64> {
        self.0.get(&weekday).and_then(|hours| hours.get(&hour)).copied()
    }

    pub fn weekdays(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.keys().copied()
    }
}
