use tracing::{info, warn};

use dxs_client::{ClientError, DxsClient};

pub mod api;
mod config;

pub use config::CollectorConfig;

/// Result of asking the device for every catalog id in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub received: usize,
    /// Catalog ids the device did not answer for, in catalog order.
    pub missing: Vec<u32>,
}

/// Checks connectivity and catalog coverage before polling starts.
pub async fn probe_device(client: &DxsClient) -> Result<ProbeReport, ClientError> {
    let ids: Vec<u32> = measurement_catalog::ids().collect();
    let readings = client.fetch_many(&ids).await?;
    let missing: Vec<u32> = ids
        .iter()
        .copied()
        .filter(|id| !readings.contains_key(id))
        .collect();

    if missing.is_empty() {
        info!(received = readings.len(), "device probe ok");
    } else {
        warn!(
            received = readings.len(),
            missing = ?missing,
            "device did not report every catalog id"
        );
    }

    Ok(ProbeReport {
        received: ids.len() - missing.len(),
        missing,
    })
}
