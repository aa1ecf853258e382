use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use metrics::gauge;
use tokio::task::JoinSet;
use tracing::warn;

use dxs_client::ReadingSource;
use measurement_catalog::MeasurementDefinition;
use types::MeasurementState;

use crate::poller::{Measurement, MeasurementPoller};
use crate::PollerError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub refreshed: usize,
    pub available: usize,
    pub unavailable: usize,
}

/// The set of measurements a host registers, keyed by dxsId.
pub struct MeasurementRegistry {
    measurements: Vec<Arc<dyn Measurement>>,
    index: HashMap<u32, usize>,
}

impl MeasurementRegistry {
    pub fn new(measurements: Vec<Arc<dyn Measurement>>) -> Result<Self, PollerError> {
        let mut index = HashMap::with_capacity(measurements.len());
        for (position, measurement) in measurements.iter().enumerate() {
            let id = measurement.definition().id;
            if index.insert(id, position).is_some() {
                return Err(PollerError::DuplicateMeasurement(id));
            }
        }
        Ok(Self {
            measurements,
            index,
        })
    }

    /// One poller per catalog entry, all sharing `source`.
    pub fn from_catalog(source: Arc<dyn ReadingSource>, throttle: Duration) -> Self {
        let measurements: Vec<Arc<dyn Measurement>> = measurement_catalog::measurements()
            .iter()
            .map(|definition| {
                Arc::new(MeasurementPoller::new(definition, source.clone(), throttle))
                    as Arc<dyn Measurement>
            })
            .collect();
        let index = measurements
            .iter()
            .enumerate()
            .map(|(position, measurement)| (measurement.definition().id, position))
            .collect();
        Self {
            measurements,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn list_measurements(&self) -> Vec<&'static MeasurementDefinition> {
        self.measurements
            .iter()
            .map(|measurement| measurement.definition())
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&Arc<dyn Measurement>> {
        self.index.get(&id).map(|position| &self.measurements[*position])
    }

    /// Throttled refresh of one measurement; `None` if the id is not registered.
    pub async fn refresh(&self, id: u32) -> Option<MeasurementState> {
        match self.get(id) {
            Some(measurement) => Some(measurement.refresh().await),
            None => None,
        }
    }

    pub async fn current_state(&self, id: u32) -> Option<MeasurementState> {
        match self.get(id) {
            Some(measurement) => Some(measurement.current_state().await),
            None => None,
        }
    }

    pub async fn snapshot(&self) -> Vec<(&'static MeasurementDefinition, MeasurementState)> {
        let mut out = Vec::with_capacity(self.measurements.len());
        for measurement in &self.measurements {
            out.push((measurement.definition(), measurement.current_state().await));
        }
        out
    }

    /// Refreshes every measurement concurrently, one task each.
    ///
    /// Dropping the returned future aborts the outstanding tasks; their
    /// measurements keep their previous state.
    pub async fn refresh_all(&self) -> RefreshSummary {
        let mut join_set = JoinSet::new();
        for measurement in &self.measurements {
            let measurement = Arc::clone(measurement);
            join_set.spawn(async move { measurement.refresh().await.available });
        }

        let mut summary = RefreshSummary::default();
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(available) => {
                    summary.refreshed += 1;
                    if available {
                        summary.available += 1;
                    } else {
                        summary.unavailable += 1;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "measurement refresh task failed");
                }
            }
        }

        gauge!("piko_measurements_available").set(summary.available as f64);
        summary
    }
}
