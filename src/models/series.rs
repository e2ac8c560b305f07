//! Sample series: raw sensor readings, detected gaps, and the uniform grid.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::time;

/// A single CO2 concentration reading, as ingested from a sensor node.
///
/// Samples are the source of truth and immutable once ingested. Timestamps are
/// stored in UTC; localization to the display time zone happens inside the
/// preprocessing stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub co2_ppm: u32,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, co2_ppm: u32) -> Self {
        Self { timestamp, co2_ppm }
    }
}

/// An ordered sequence of samples for one node.
///
/// Timestamps are strictly increasing; the constructor enforces this so the
/// preprocessing stage can rely on it. The series may contain arbitrarily
/// large irregular gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    samples: Vec<Sample>,
}

impl RawSeries {
    /// Build a series from samples, rejecting out-of-order or duplicate
    /// timestamps.
    pub fn new(samples: Vec<Sample>) -> EngineResult<Self> {
        for pair in samples.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(EngineError::InvalidSeries(format!(
                    "timestamps must be strictly increasing, got {} after {}",
                    pair[1].timestamp, pair[0].timestamp
                )));
            }
        }
        Ok(Self { samples })
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}

/// A stretch of time with no trustworthy original data.
///
/// Derived by the gap detector, never persisted. Both bounds are instants in
/// the display time zone; masking treats the interval as inclusive on both
/// ends (see the gap masker).
#[derive(Debug, Clone, PartialEq)]
pub struct Gap {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl Gap {
    pub fn duration(&self) -> Duration {
        self.end.clone() - self.start.clone()
    }

    /// Whether `instant` lies within `[start, end]`.
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

/// One point of the uniform grid. A `None` concentration marks missing data;
/// it is first-class and never conflated with a zero reading.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub bucket_start: DateTime<Tz>,
    pub co2_ppm: Option<f64>,
}

/// A fixed-cadence reconstruction of an irregular sensor stream.
///
/// Produced once per preprocessing invocation and discarded after the
/// response is built.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformSeries {
    rate_s: u32,
    points: Vec<GridPoint>,
}

impl UniformSeries {
    pub(crate) fn new(rate_s: u32, points: Vec<GridPoint>) -> Self {
        Self { rate_s, points }
    }

    /// Cadence of the grid in seconds.
    pub fn rate_s(&self) -> u32 {
        self.rate_s
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> {
        self.points.iter()
    }

    /// Number of grid points carrying a value.
    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| p.co2_ppm.is_some()).count()
    }

    /// Number of grid points masked as missing.
    pub fn missing_count(&self) -> usize {
        self.points.iter().filter(|p| p.co2_ppm.is_none()).count()
    }

    /// The sub-series of points whose bucket start falls in the given local
    /// calendar month. Month-based analyses operate on this slice, as the
    /// month is the time window served per request.
    pub fn slice_month(&self, year: i32, month: u32) -> UniformSeries {
        let points = self
            .points
            .iter()
            .filter(|p| time::in_month(&p.bucket_start, year, month))
            .cloned()
            .collect();
        UniformSeries::new(self.rate_s, points)
    }
}
