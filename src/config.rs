//! Analysis configuration.
//!
//! All engine parameters are pure inputs: there is no dynamic reconfiguration.
//! Values can be loaded from a TOML file; every field has a default matching
//! the production deployment, so a missing file section only overrides what it
//! names.

use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Parameters of the preprocessing and assessment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum tolerated spacing between successive raw samples before the
    /// stretch is declared a gap.
    #[serde(default = "default_max_gap_s")]
    pub max_gap_s: u32,
    /// Cadence of the uniform grid the raw samples are resampled to.
    #[serde(default = "default_target_rate_s")]
    pub target_rate_s: u32,
    /// Concentration above which air no longer counts as clean
    /// (Pettenkofer number).
    #[serde(default = "default_clean_air_threshold_ppm")]
    pub clean_air_threshold_ppm: f64,
    /// Concentration that disqualifies the whole month if ever reached on a
    /// valid day.
    #[serde(default = "default_bad_air_threshold_ppm")]
    pub bad_air_threshold_ppm: f64,
    /// Maximum admissible daily excess score.
    #[serde(default = "default_excess_score_threshold")]
    pub excess_score_threshold: f64,
    /// Admissible fraction of valid days with excess exposure.
    #[serde(default = "default_excess_rate_admissible")]
    pub excess_rate_admissible: f64,
    /// Required fraction of days with sufficient data quality.
    #[serde(default = "default_valid_day_rate_required")]
    pub valid_day_rate_required: f64,
    /// Time zone whose calendar defines day and hour bucket boundaries.
    #[serde(default = "default_display_timezone")]
    pub display_timezone: Tz,
}

fn default_max_gap_s() -> u32 {
    1800
}

fn default_target_rate_s() -> u32 {
    600
}

fn default_clean_air_threshold_ppm() -> f64 {
    1000.0
}

fn default_bad_air_threshold_ppm() -> f64 {
    2000.0
}

fn default_excess_score_threshold() -> f64 {
    150.0
}

fn default_excess_rate_admissible() -> f64 {
    0.3
}

fn default_valid_day_rate_required() -> f64 {
    0.6
}

fn default_display_timezone() -> Tz {
    chrono_tz::Europe::Berlin
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_gap_s: default_max_gap_s(),
            target_rate_s: default_target_rate_s(),
            clean_air_threshold_ppm: default_clean_air_threshold_ppm(),
            bad_air_threshold_ppm: default_bad_air_threshold_ppm(),
            excess_score_threshold: default_excess_score_threshold(),
            excess_rate_admissible: default_excess_rate_admissible(),
            valid_day_rate_required: default_valid_day_rate_required(),
            display_timezone: default_display_timezone(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Configuration(format!("failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            EngineError::Configuration(format!("failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `airlytics.toml` in the current directory, then the
    /// parent directory. Falls back to the built-in defaults when no file is
    /// found.
    pub fn from_default_location() -> Result<Self, EngineError> {
        let search_paths = vec![
            PathBuf::from("airlytics.toml"),
            PathBuf::from("../airlytics.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
