//! The computation pipeline.
//!
//! Raw samples flow through the [`preprocessing`] stage into a uniform
//! gap-annotated series, which the [`daily`] and [`hourly`] aggregators
//! independently reduce to per-bucket statistics. Those feed the
//! [`qualification`] gate and the weekday [`histogram`]; [`analysis`] wires
//! the whole month-level flow together.

pub mod analysis;
pub mod daily;
pub mod histogram;
pub mod hourly;
pub mod preprocessing;
pub mod qualification;

mod stats;

#[cfg(test)]
#[path = "qualification_tests.rs"]
mod qualification_tests;

pub use analysis::{analyze_month, MonthAnalysis};
pub use daily::daily_metrics;
pub use histogram::weekday_histogram;
pub use hourly::hourly_metrics;
pub use preprocessing::{find_gaps, mark_gaps, resample_to_uniform_grid, Preprocessor};
pub use qualification::clean_air_medal;
