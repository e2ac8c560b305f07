//! # airlytics
//!
//! Gap-aware CO2 time-series preprocessing and monthly air-quality assessment.
//!
//! This crate turns irregularly spaced CO2 concentration samples from a room's
//! sensor into trustworthy monthly assessments. Sensors report on event-driven,
//! clock-skewed schedules; the engine resamples those readings onto a uniform
//! grid while honestly tracking where original data is missing, then rolls the
//! grid up into daily and hourly statistics, a weekday/hour exposure histogram,
//! and a pass/fail "clean air medal" verdict for the month.
//!
//! ## Architecture
//!
//! - [`models`]: domain data model — raw and uniform sample series, gaps,
//!   per-bucket metrics, qualification outcomes
//! - [`services`]: the computation pipeline — preprocessing (gap detection,
//!   resampling, gap masking), daily/hourly aggregation, weekday histogram,
//!   clean-air qualification, month orchestration
//! - [`api`]: serializable DTOs for embedding the engine behind an API layer
//! - [`repo`]: the sample-source seam — an async repository trait resolving a
//!   room and time window to the readings of its single active installation
//! - [`config`]: analysis parameters, loadable from TOML
//!
//! The engine itself is a pure, single-threaded computation: no I/O, no shared
//! mutable state, deterministic for any given input. Independent month/room
//! analyses may run in parallel with zero coordination.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod services;

pub use config::AnalysisConfig;
pub use error::{EngineError, EngineResult};
