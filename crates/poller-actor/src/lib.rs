use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::info;

mod poller;
mod registry;

pub use poller::{Freshness, Measurement, MeasurementPoller, DEFAULT_THROTTLE};
pub use registry::{MeasurementRegistry, RefreshSummary};

#[derive(Debug, Clone)]
pub struct ActorConfig {
    /// Host cadence: how often every measurement is asked to refresh.
    pub poll_interval: Duration,
    /// Per-measurement minimum spacing between network fetches.
    pub throttle: Duration,
    pub jitter_ms: u64,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            throttle: DEFAULT_THROTTLE,
            jitter_ms: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("measurement with dxsId {0} registered twice")]
    DuplicateMeasurement(u32),
}

/// Drives periodic refreshes of every registered measurement.
pub struct PollerActor {
    registry: Arc<MeasurementRegistry>,
    shutdown: watch::Receiver<bool>,
    config: ActorConfig,
}

impl PollerActor {
    pub fn new(
        registry: Arc<MeasurementRegistry>,
        shutdown: watch::Receiver<bool>,
        config: ActorConfig,
    ) -> Self {
        Self {
            registry,
            shutdown,
            config,
        }
    }

    /// Runs until shutdown is signalled. A cycle in flight at that point is
    /// abandoned.
    pub async fn run(mut self) {
        let mut iteration = 0u64;

        loop {
            if *self.shutdown.borrow() {
                info!("poller shutdown requested");
                break;
            }

            let cycle_start = Instant::now();
            let summary = tokio::select! {
                summary = self.registry.refresh_all() => summary,
                _ = shutdown_requested(&mut self.shutdown) => {
                    info!("poller shutdown requested mid-cycle");
                    break;
                }
            };

            iteration = iteration.wrapping_add(1);
            let elapsed = cycle_start.elapsed();
            let lag = elapsed.saturating_sub(self.config.poll_interval);
            let delay = jittered_delay(self.config.poll_interval, self.config.jitter_ms, iteration);
            info!(
                iteration,
                measurements = summary.refreshed,
                available = summary.available,
                unavailable = summary.unavailable,
                elapsed_ms = elapsed.as_millis(),
                lag_ms = lag.as_millis(),
                delay_ms = delay.as_millis(),
                "poll cycle complete"
            );

            tokio::select! {
                _ = sleep(delay) => {},
                _ = shutdown_requested(&mut self.shutdown) => {
                    info!("poller shutdown requested");
                    break;
                }
            }
        }
    }
}

async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    // A closed channel counts as shutdown.
    let _ = shutdown.wait_for(|stop| *stop).await;
}

fn jittered_delay(base: Duration, jitter_ms: u64, iteration: u64) -> Duration {
    if jitter_ms == 0 {
        return base;
    }

    let jitter_window = jitter_ms.max(1);
    let seed = unix_ms().wrapping_add(iteration.wrapping_mul(1_664_525));
    let offset = seed % jitter_window;
    base + Duration::from_millis(offset)
}

pub(crate) fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
