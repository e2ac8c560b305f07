//! Month-level orchestration of the pipeline.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::EngineResult;
use crate::models::metrics::{DayMetrics, HourMetrics, Qualification, WeekdayHistogram};
use crate::models::series::RawSeries;
use crate::services::daily::daily_metrics;
use crate::services::histogram::weekday_histogram;
use crate::services::hourly::hourly_metrics;
use crate::services::preprocessing::Preprocessor;
use crate::services::qualification::clean_air_medal;

/// Everything the engine derives for one room and month. Recomputed per
/// request; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthAnalysis {
    pub year: i32,
    pub month: u32,
    pub daily: Vec<DayMetrics>,
    pub hourly: Vec<HourMetrics>,
    pub qualification: Qualification,
    pub histogram: WeekdayHistogram,
}

/// Run the full pipeline for one local calendar month: preprocess the raw
/// series, slice out the month, aggregate daily and hourly statistics, and
/// derive the qualification verdict and weekday histogram.
///
/// The raw series may extend beyond the requested month; only the grid points
/// of that month contribute. Fails only when the raw series is empty.
pub fn analyze_month(
    series: &RawSeries,
    year: i32,
    month: u32,
    config: &AnalysisConfig,
) -> EngineResult<MonthAnalysis> {
    let prepared = Preprocessor::from_config(config).prepare(series)?;
    let month_series = prepared.slice_month(year, month);

    let daily = daily_metrics(&month_series, config.clean_air_threshold_ppm);
    let hourly = hourly_metrics(&month_series, config.clean_air_threshold_ppm);
    let qualification = clean_air_medal(&daily, config);
    let histogram = weekday_histogram(&hourly);

    info!(
        "analyzed {:04}-{:02}: {} day buckets ({} valid), {} complete hours, medal {:?}",
        year,
        month,
        daily.len(),
        daily.iter().filter(|d| d.is_valid()).count(),
        hourly.len(),
        qualification
    );

    Ok(MonthAnalysis {
        year,
        month,
        daily,
        hourly,
        qualification,
        histogram,
    })
}
