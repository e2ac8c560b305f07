//! The sample-source seam.
//!
//! The engine never reads storage itself; callers fetch the raw series for a
//! room and window through [`SampleRepository`] before invoking the pipeline.
//! The trait guarantees the engine's central precondition: at most one sensor
//! installation is active in a room at any instant of the requested window,
//! so a fetched series is always a single uninterrupted stream of one node.
//!
//! [`LocalRepository`] is an in-memory implementation for tests and embedders
//! without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::series::{RawSeries, Sample};

/// A sensor node mounted in a room for a period of time. An open-ended
/// installation (`removed_at == None`) is still active.
#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    pub node_id: String,
    pub room_id: String,
    pub installed_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl Installation {
    /// Whether this installation is active during any part of
    /// `[from, to)`.
    fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.installed_at < to && self.removed_at.map_or(true, |removed| removed > from)
    }
}

/// Read access to raw samples, resolved per room.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// The ordered raw series of the single installation covering the room in
    /// `[from, to)`.
    ///
    /// Fails with [`EngineError::InconsistentInstallation`] when more than one
    /// installation overlaps the window, and with
    /// [`EngineError::InsufficientData`] when none does.
    async fn room_series(
        &self,
        room_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> EngineResult<RawSeries>;
}

#[derive(Debug, Default)]
struct LocalState {
    installations: Vec<Installation>,
    samples_by_node: HashMap<String, Vec<Sample>>,
}

/// In-memory sample repository.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node installation in a room.
    pub fn add_installation(&self, installation: Installation) {
        self.state.write().installations.push(installation);
    }

    /// Append a reading for a node. Timestamps must arrive strictly
    /// increasing per node; duplicates and reordering are rejected at this
    /// boundary so stored series stay valid by construction.
    pub fn ingest(&self, node_id: &str, sample: Sample) -> EngineResult<()> {
        let mut state = self.state.write();
        let samples = state.samples_by_node.entry(node_id.to_string()).or_default();
        if let Some(last) = samples.last() {
            if sample.timestamp <= last.timestamp {
                return Err(EngineError::InvalidSeries(format!(
                    "node {}: sample at {} does not advance past {}",
                    node_id, sample.timestamp, last.timestamp
                )));
            }
        }
        samples.push(sample);
        Ok(())
    }
}

#[async_trait]
impl SampleRepository for LocalRepository {
    async fn room_series(
        &self,
        room_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> EngineResult<RawSeries> {
        let state = self.state.read();

        let active: Vec<&Installation> = state
            .installations
            .iter()
            .filter(|i| i.room_id == room_id && i.overlaps(from, to))
            .collect();
        let installation = match active.as_slice() {
            [] => {
                return Err(EngineError::InsufficientData(format!(
                    "no installation covers room {} in the requested window",
                    room_id
                )))
            }
            [single] => *single,
            _ => {
                return Err(EngineError::InconsistentInstallation {
                    room: room_id.to_string(),
                    details: format!("{} overlapping installations", active.len()),
                })
            }
        };

        let samples: Vec<Sample> = state
            .samples_by_node
            .get(&installation.node_id)
            .map(|samples| {
                samples
                    .iter()
                    .filter(|s| {
                        s.timestamp >= from
                            && s.timestamp < to
                            && s.timestamp >= installation.installed_at
                            && installation.removed_at.map_or(true, |r| s.timestamp < r)
                    })
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        RawSeries::new(samples)
    }
}
