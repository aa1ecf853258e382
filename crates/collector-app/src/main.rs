use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use collector_app::api::{self, AppState};
use collector_app::{probe_device, CollectorConfig};
use dxs_client::DxsClient;
use poller_actor::{MeasurementRegistry, PollerActor};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = parse_config_arg();
    let config = CollectorConfig::load_with_path(config_path).context("load config failed")?;
    config.validate().context("config validation failed")?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("metrics recorder install failed")?;

    let client = DxsClient::new(config.device.clone()).context("device client init failed")?;
    info!(
        endpoint = %client.endpoint(),
        authenticated = config.device.username.is_some(),
        timeout_ms = config.device.timeout_ms,
        measurements = measurement_catalog::measurements().len(),
        "collector starting"
    );
    if let Err(err) = probe_device(&client).await {
        warn!(error = %err, "device probe failed, polling anyway");
    }

    let registry = Arc::new(MeasurementRegistry::from_catalog(
        Arc::new(client),
        config.poller.throttle,
    ));
    let actor = PollerActor::new(registry.clone(), shutdown_rx.clone(), config.poller.clone());
    let actor_handle = tokio::spawn(actor.run());

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "http api listening");
    let app = api::router(AppState { registry, metrics });
    let server_shutdown = shutdown_rx.clone();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(server_shutdown))
            .await
    });

    notify_ready();
    let watchdog_handle = start_watchdog(shutdown_rx.clone());

    tokio::signal::ctrl_c()
        .await
        .context("install ctrl-c handler failed")?;
    info!("shutdown signal received");
    let _ = shutdown_tx.send(true);

    if let Err(err) = actor_handle.await {
        warn!(error = %err, "poller task join failed");
    }
    match server_handle.await {
        Ok(Err(err)) => warn!(error = %err, "http server exited with error"),
        Err(err) => warn!(error = %err, "http server task join failed"),
        Ok(Ok(())) => {}
    }
    if let Some(handle) = watchdog_handle {
        let _ = handle.await;
    }
    Ok(())
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

fn parse_config_arg() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    None
}

#[cfg(target_os = "linux")]
fn notify_ready() {
    if let Err(err) = sd_notify::notify(true, &[sd_notify::NotifyState::Ready]) {
        warn!(error = %err, "systemd ready notify failed");
    }
}

#[cfg(not(target_os = "linux"))]
fn notify_ready() {}

#[cfg(target_os = "linux")]
fn start_watchdog(shutdown: watch::Receiver<bool>) -> Option<tokio::task::JoinHandle<()>> {
    let interval = watchdog_interval()?;
    Some(tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sleep(interval) => {
                    let state = [sd_notify::NotifyState::Watchdog];
                    if let Err(err) = sd_notify::notify(false, &state) {
                        warn!(error = %err, "systemd watchdog notify failed");
                    }
                }
                _ = wait_for_shutdown(shutdown.clone()) => break,
            }
        }
    }))
}

#[cfg(not(target_os = "linux"))]
fn start_watchdog(_shutdown: watch::Receiver<bool>) -> Option<tokio::task::JoinHandle<()>> {
    None
}

#[cfg(target_os = "linux")]
fn watchdog_interval() -> Option<Duration> {
    let watchdog_usec = env::var("WATCHDOG_USEC").ok()?.parse::<u64>().ok()?;
    if let Some(pid) = env::var("WATCHDOG_PID")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
    {
        if pid != std::process::id() {
            return None;
        }
    }

    let interval = watchdog_usec.saturating_div(2).max(100_000);
    Some(Duration::from_micros(interval))
}
