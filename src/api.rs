//! Data transfer objects for the response boundary.
//!
//! The engine itself only produces in-memory structures; these flattened
//! row types are what an embedding API layer serializes. Conditionally
//! defined statistics stay nullable instead of collapsing to sentinel
//! numbers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::metrics::{DayMetrics, HourMetrics, WeekdayHistogram};
use crate::services::analysis::MonthAnalysis;

/// One row of the daily metrics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMetricsDto {
    pub day: NaiveDate,
    pub is_valid: bool,
    pub day_duration_s: u32,
    pub gap_duration_s: u32,
    pub max_co2_ppm: Option<f64>,
    pub mean_co2_ppm: Option<f64>,
    pub excess_duration_s: Option<u32>,
    pub mean_excess_co2_ppm: Option<f64>,
    pub excess_rate: Option<f64>,
    pub excess_score: Option<f64>,
}

impl From<&DayMetrics> for DayMetricsDto {
    fn from(m: &DayMetrics) -> Self {
        Self {
            day: m.day,
            is_valid: m.is_valid(),
            day_duration_s: m.duration_s,
            gap_duration_s: m.gap_duration_s,
            max_co2_ppm: m.stats.map(|s| s.max_co2_ppm),
            mean_co2_ppm: m.stats.map(|s| s.mean_co2_ppm),
            excess_duration_s: m.stats.map(|s| s.excess_duration_s),
            mean_excess_co2_ppm: m.stats.map(|s| s.mean_excess_co2_ppm),
            excess_rate: m.stats.map(|s| s.excess_rate),
            excess_score: m.stats.map(|s| s.excess_score),
        }
    }
}

/// One row of the hourly metrics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourMetricsDto {
    pub hour: NaiveDateTime,
    pub is_valid: bool,
    pub gap_duration_s: u32,
    pub max_co2_ppm: Option<f64>,
    pub mean_co2_ppm: Option<f64>,
    pub excess_duration_s: Option<u32>,
    pub mean_excess_co2_ppm: Option<f64>,
    pub excess_rate: Option<f64>,
    pub excess_score: Option<f64>,
}

impl From<&HourMetrics> for HourMetricsDto {
    fn from(m: &HourMetrics) -> Self {
        Self {
            hour: m.hour,
            is_valid: m.is_valid(),
            gap_duration_s: m.gap_duration_s,
            max_co2_ppm: m.stats.map(|s| s.max_co2_ppm),
            mean_co2_ppm: m.stats.map(|s| s.mean_co2_ppm),
            excess_duration_s: m.stats.map(|s| s.excess_duration_s),
            mean_excess_co2_ppm: m.stats.map(|s| s.mean_excess_co2_ppm),
            excess_rate: m.stats.map(|s| s.excess_rate),
            excess_score: m.stats.map(|s| s.excess_score),
        }
    }
}

/// The serialized month assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthReportDto {
    pub year: i32,
    pub month: u32,
    /// `null` when the month held no data at all (indeterminate).
    pub clean_air_medal: Option<bool>,
    pub days: Vec<DayMetricsDto>,
    pub hours: Vec<HourMetricsDto>,
    pub weekday_histogram: WeekdayHistogram,
}

impl From<&MonthAnalysis> for MonthReportDto {
    fn from(analysis: &MonthAnalysis) -> Self {
        Self {
            year: analysis.year,
            month: analysis.month,
            clean_air_medal: analysis.qualification.awarded(),
            days: analysis.daily.iter().map(DayMetricsDto::from).collect(),
            hours: analysis.hourly.iter().map(HourMetricsDto::from).collect(),
            weekday_histogram: analysis.histogram.clone(),
        }
    }
}
