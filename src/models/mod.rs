//! Domain data model for the analysis engine.
//!
//! All types here are transient: they are created fresh per analysis request
//! and discarded after the response is produced. Only raw [`Sample`]s have a
//! persistent life upstream of the engine.

pub mod metrics;
pub mod series;
pub mod time;

#[cfg(test)]
#[path = "series_tests.rs"]
mod series_tests;

pub use metrics::{DayMetrics, ExposureStats, HourMetrics, Qualification, WeekdayHistogram};
pub use series::{Gap, GridPoint, RawSeries, Sample, UniformSeries};
