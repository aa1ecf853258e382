use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use tracing::{debug, warn};

use dxs_client::ReadingSource;
use measurement_catalog::MeasurementDefinition;
use types::MeasurementState;

use crate::unix_ms;

/// Minimum spacing between two network fetches of the same measurement.
pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Value confirmed by a fetch inside the current throttle window.
    Fresh,
    /// Serving a cached value, or nothing, until the next successful fetch.
    Stale,
}

/// What a host needs from a measurement.
#[async_trait]
pub trait Measurement: Send + Sync {
    fn definition(&self) -> &'static MeasurementDefinition;

    /// Fetches a new value unless throttled, and returns the resulting state.
    async fn refresh(&self) -> MeasurementState;

    async fn current_state(&self) -> MeasurementState;
}

#[derive(Debug, Clone, Default)]
struct PollState {
    state: MeasurementState,
    last_attempt: Option<Instant>,
}

/// Throttled, cached poller for a single measurement.
pub struct MeasurementPoller {
    definition: &'static MeasurementDefinition,
    source: Arc<dyn ReadingSource>,
    throttle: Duration,
    // Held across the fetch so a burst of callers inside one window
    // produces a single request. Readers never take it.
    fetch_gate: Mutex<()>,
    inner: watch::Sender<PollState>,
}

impl MeasurementPoller {
    pub fn new(
        definition: &'static MeasurementDefinition,
        source: Arc<dyn ReadingSource>,
        throttle: Duration,
    ) -> Self {
        let (inner, _) = watch::channel(PollState::default());
        Self {
            definition,
            source,
            throttle,
            fetch_gate: Mutex::new(()),
            inner,
        }
    }

    pub fn definition(&self) -> &'static MeasurementDefinition {
        self.definition
    }

    pub async fn refresh(&self) -> MeasurementState {
        let _gate = self.fetch_gate.lock().await;
        if let Some(state) = self.throttled_state() {
            counter!("piko_refresh_throttled_total").increment(1);
            return state;
        }

        let attempt = Instant::now();
        let attempt_ms = unix_ms();
        let result = self.source.fetch(self.definition.id).await;

        // No await below: a refresh dropped mid-fetch leaves the state untouched.
        let outcome = match result {
            Ok(raw) => {
                let value = self.definition.convert(&raw);
                debug!(
                    dxs_id = self.definition.id,
                    key = self.definition.key,
                    value = %value,
                    "measurement refreshed"
                );
                counter!("piko_fetch_total", "outcome" => "ok").increment(1);
                Some(value)
            }
            Err(err) => {
                warn!(
                    dxs_id = self.definition.id,
                    key = self.definition.key,
                    class = err.class().as_str(),
                    error = %err,
                    "measurement refresh failed"
                );
                counter!("piko_fetch_total", "outcome" => err.class().as_str()).increment(1);
                None
            }
        };

        self.inner.send_modify(|inner| {
            inner.last_attempt = Some(attempt);
            inner.state.last_fetch_at_ms = Some(attempt_ms);
            inner.state.available = outcome.is_some();
            if let Some(value) = outcome {
                inner.state.last_value = Some(value);
            }
        });
        self.inner.borrow().state.clone()
    }

    /// Cached state. Never waits on a fetch in flight.
    pub async fn current_state(&self) -> MeasurementState {
        self.inner.borrow().state.clone()
    }

    pub async fn freshness(&self) -> Freshness {
        let inner = self.inner.borrow();
        match inner.last_attempt {
            Some(last_attempt)
                if inner.state.available && last_attempt.elapsed() < self.throttle =>
            {
                Freshness::Fresh
            }
            _ => Freshness::Stale,
        }
    }

    fn throttled_state(&self) -> Option<MeasurementState> {
        let inner = self.inner.borrow();
        let last_attempt = inner.last_attempt?;
        (last_attempt.elapsed() < self.throttle).then(|| inner.state.clone())
    }
}

#[async_trait]
impl Measurement for MeasurementPoller {
    fn definition(&self) -> &'static MeasurementDefinition {
        self.definition
    }

    async fn refresh(&self) -> MeasurementState {
        MeasurementPoller::refresh(self).await
    }

    async fn current_state(&self) -> MeasurementState {
        MeasurementPoller::current_state(self).await
    }
}
