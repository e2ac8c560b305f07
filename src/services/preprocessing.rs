//! Gap-aware preprocessing of raw sensor series.
//!
//! Most samples are nonuniformly spaced because of transmission delays and
//! clock skew. To simplify downstream statistics, the preprocessor resamples
//! them on a uniform grid at the target rate. Resampling across stretches
//! where the original data has large gaps would yield mostly noise, so those
//! stretches are detected first and the corresponding grid points are masked
//! as missing afterwards. Applying the gaps after resampling keeps the
//! interpolation from silently bridging a real outage.
//!
//! The three stages are exposed individually so gap semantics and
//! interpolation math stay independently testable.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use log::debug;

use crate::config::AnalysisConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::series::{Gap, GridPoint, RawSeries, UniformSeries};
use crate::models::time;

/// Resolution of the intermediate upsampling grid.
const UPSAMPLE_STEP_S: i64 = 60;

/// Find the stretches where successive raw samples are farther apart than
/// `max_gap_s`.
///
/// The instant sequence is padded with the floor-of-local-day of the first
/// sample and the ceil-of-local-day of the last, so that leading and trailing
/// gaps of the covered days become visible too. Gap bounds are instants in
/// the display time zone, sorted ascending and pairwise disjoint.
pub fn find_gaps(series: &RawSeries, max_gap_s: u32, tz: Tz) -> EngineResult<Vec<Gap>> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(EngineError::InsufficientData(
                "cannot detect gaps in an empty series".into(),
            ))
        }
    };

    let mut instants: Vec<DateTime<Tz>> = Vec::with_capacity(series.len() + 2);
    instants.push(time::floor_to_day(&first.timestamp.with_timezone(&tz)));
    instants.extend(series.iter().map(|s| s.timestamp.with_timezone(&tz)));
    instants.push(time::ceil_to_day(&last.timestamp.with_timezone(&tz)));

    let mut gaps = Vec::new();
    for pair in instants.windows(2) {
        let diff_s = (pair[1] - pair[0]).num_seconds();
        if diff_s > i64::from(max_gap_s) {
            gaps.push(Gap {
                start: pair[0],
                end: pair[1],
            });
        }
    }
    Ok(gaps)
}

/// Resample a nonuniformly spaced series onto a uniform `target_rate_s` grid.
///
/// Two phases: first upsample to 1-minute resolution with linear
/// interpolation between known points, then downsample onto the target grid
/// by holding the most recent 1-minute value at or before each target
/// instant. A single coarse pass would alias sparse regions; a naive fill
/// would not smooth transient noise.
///
/// The series is duplicate-padded with a copy of the first value at
/// floor-of-local-day and a copy of the last value at ceil-of-local-day, so
/// interpolation never extrapolates. The grid is anchored at the padded start
/// and includes the padded end instant.
pub fn resample_to_uniform_grid(
    series: &RawSeries,
    target_rate_s: u32,
    tz: Tz,
) -> EngineResult<UniformSeries> {
    if target_rate_s == 0 {
        return Err(EngineError::Configuration(
            "target rate must be positive".into(),
        ));
    }
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(EngineError::InsufficientData(
                "cannot resample an empty series".into(),
            ))
        }
    };

    let first_local = first.timestamp.with_timezone(&tz);
    let last_local = last.timestamp.with_timezone(&tz);
    let start = time::floor_to_day(&first_local);
    let end = time::ceil_to_day(&last_local);

    // Duplicate-pad the localized series at the day boundaries.
    let mut points: Vec<(DateTime<Tz>, f64)> = Vec::with_capacity(series.len() + 2);
    if start < first_local {
        points.push((start, f64::from(first.co2_ppm)));
    }
    points.extend(
        series
            .iter()
            .map(|s| (s.timestamp.with_timezone(&tz), f64::from(s.co2_ppm))),
    );
    if end > last_local {
        points.push((end, f64::from(last.co2_ppm)));
    }

    // Upsample: average the samples of each 1-minute bin, then close the
    // empty bins by linear interpolation. The padded endpoints guarantee the
    // first and last bins are occupied.
    let total_s = (end - start).num_seconds();
    let bin_count = (total_s / UPSAMPLE_STEP_S) as usize + 1;
    let mut sums = vec![0.0_f64; bin_count];
    let mut counts = vec![0_u32; bin_count];
    for (ts, value) in &points {
        let idx = (((*ts - start).num_seconds()) / UPSAMPLE_STEP_S) as usize;
        let idx = idx.min(bin_count - 1);
        sums[idx] += value;
        counts[idx] += 1;
    }
    let bins: Vec<Option<f64>> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| (count > 0).then(|| sum / f64::from(count)))
        .collect();
    let minute_values = interpolate_linear(&bins);

    // Downsample: hold the most recent 1-minute value at or before each
    // target instant. Never a future value.
    let step = Duration::seconds(i64::from(target_rate_s));
    let mut grid = Vec::new();
    let mut bucket_start = start;
    while bucket_start <= end {
        let minute_idx = (((bucket_start - start).num_seconds()) / UPSAMPLE_STEP_S) as usize;
        grid.push(GridPoint {
            bucket_start,
            co2_ppm: Some(minute_values[minute_idx.min(bin_count - 1)]),
        });
        bucket_start = bucket_start + step;
    }

    Ok(UniformSeries::new(target_rate_s, grid))
}

/// Close the `None` runs of a uniform bin sequence by linear interpolation
/// between the neighboring occupied bins. Runs before the first or after the
/// last occupied bin are held at the nearest known value instead of being
/// extrapolated.
fn interpolate_linear(bins: &[Option<f64>]) -> Vec<f64> {
    let mut values = vec![0.0_f64; bins.len()];
    let mut last_known: Option<(usize, f64)> = None;

    for (i, bin) in bins.iter().enumerate() {
        if let Some(value) = *bin {
            match last_known {
                Some((j, prev)) => {
                    for (k, slot) in values.iter_mut().enumerate().take(i).skip(j + 1) {
                        let fraction = (k - j) as f64 / (i - j) as f64;
                        *slot = prev + (value - prev) * fraction;
                    }
                }
                None => {
                    for slot in values.iter_mut().take(i) {
                        *slot = value;
                    }
                }
            }
            values[i] = value;
            last_known = Some((i, value));
        }
    }

    if let Some((j, prev)) = last_known {
        for slot in values.iter_mut().skip(j + 1) {
            *slot = prev;
        }
    }
    values
}

/// Mask the grid points falling inside detected gaps as missing.
///
/// The interval is treated as inclusive on both ends. Gaps are disjoint by
/// construction, and re-applying an overlapping gap is idempotent.
pub fn mark_gaps(series: &mut UniformSeries, gaps: &[Gap]) {
    if gaps.is_empty() {
        return;
    }
    for point in series.points_mut() {
        if gaps.iter().any(|gap| gap.contains(&point.bucket_start)) {
            point.co2_ppm = None;
        }
    }
}

/// The externally consumed entry point of the preprocessing stage: gap
/// detection, uniform resampling, and gap masking composed into one call.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    max_gap_s: u32,
    target_rate_s: u32,
    timezone: Tz,
}

impl Preprocessor {
    pub fn new(max_gap_s: u32, target_rate_s: u32, timezone: Tz) -> Self {
        Self {
            max_gap_s,
            target_rate_s,
            timezone,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.max_gap_s,
            config.target_rate_s,
            config.display_timezone,
        )
    }

    /// Turn a raw series into a clean, gap-annotated uniform series in the
    /// display time zone. Fails only for an empty input series.
    pub fn prepare(&self, series: &RawSeries) -> EngineResult<UniformSeries> {
        let gaps = find_gaps(series, self.max_gap_s, self.timezone)?;
        let mut uniform = resample_to_uniform_grid(series, self.target_rate_s, self.timezone)?;
        mark_gaps(&mut uniform, &gaps);
        debug!(
            "prepared {} raw samples into {} grid points ({} masked across {} gaps)",
            series.len(),
            uniform.len(),
            uniform.missing_count(),
            gaps.len()
        );
        Ok(uniform)
    }
}
