//! Error types for the analysis engine.
//!
//! Only boundary violations are errors: an empty input series, inconsistent
//! installation records, malformed sample ordering, or a bad configuration
//! file. Everything else (partial boundary hours, fully-gapped days, absent
//! statistics) is modeled as a data state, and the pipeline always completes
//! for any non-empty, single-installation input.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error taxonomy of the analysis engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The raw series is empty: gap boundaries and resampling are undefined.
    /// Callers must surface this as a "no data" result, not a crash.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// More than one sensor installation is active in the room for some
    /// instant of the requested window. The engine refuses to aggregate
    /// mixed streams; this condition is not retryable.
    #[error("inconsistent installations for room {room}: {details}")]
    InconsistentInstallation { room: String, details: String },

    /// A sample series violates the ordering contract (timestamps must be
    /// strictly increasing per node).
    #[error("invalid sample series: {0}")]
    InvalidSeries(String),

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EngineError {
    /// Whether a caller may retry the failed request. Engine failures are
    /// deterministic, so none of them are.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
