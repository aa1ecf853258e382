use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use dxs_client::ClientConfig;
use poller_actor::ActorConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9102";

#[derive(Clone, Debug)]
pub struct CollectorConfig {
    pub device: ClientConfig,
    pub poller: ActorConfig,
    pub listen_addr: String,
}

impl CollectorConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(config_path: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file_config) = load_file_config(config_path.as_deref())? {
            apply_file_config(&mut config, file_config);
        }

        apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let host = self.device.host.trim();
        if host.is_empty() {
            anyhow::bail!("device.host is required");
        }
        if host.contains("://") || host.contains('/') {
            anyhow::bail!("device.host must be a bare host or host:port without scheme or path");
        }
        if host.chars().any(char::is_whitespace) {
            anyhow::bail!("device.host must not contain whitespace");
        }
        if self.device.password.is_some() && self.device.username.is_none() {
            anyhow::bail!("device.password requires device.username");
        }
        if self.device.timeout_ms == 0 {
            anyhow::bail!("device.timeout_ms must be >= 1");
        }
        if self.poller.poll_interval.as_millis() == 0 {
            anyhow::bail!("poller.poll_interval_ms must be >= 1");
        }
        if self.poller.throttle.as_millis() == 0 {
            anyhow::bail!("poller.throttle_ms must be >= 1");
        }
        self.listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| anyhow::anyhow!("http.listen_addr must be ip:port"))?;

        Ok(())
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            device: ClientConfig::default(),
            poller: ActorConfig::default(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

fn apply_env_overrides(config: &mut CollectorConfig) {
    if let Ok(value) = env::var("PIKO_HOST") {
        config.device.host = value;
    }

    if let Ok(value) = env::var("PIKO_USERNAME") {
        config.device.username = Some(value);
    }

    if let Ok(value) = env::var("PIKO_PASSWORD") {
        config.device.password = Some(value);
    }

    if let Some(timeout_ms) = parse_env_u64("PIKO_TIMEOUT_MS") {
        config.device.timeout_ms = timeout_ms;
    }

    if let Some(interval_ms) = parse_env_u64("PIKO_POLL_INTERVAL_MS") {
        config.poller.poll_interval = Duration::from_millis(interval_ms);
    }

    if let Some(throttle_ms) = parse_env_u64("PIKO_THROTTLE_MS") {
        config.poller.throttle = Duration::from_millis(throttle_ms);
    }

    if let Some(jitter_ms) = parse_env_u64("PIKO_JITTER_MS") {
        config.poller.jitter_ms = jitter_ms;
    }

    if let Ok(value) = env::var("PIKO_LISTEN_ADDR") {
        config.listen_addr = value;
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    device: Option<FileDeviceConfig>,
    poller: Option<FilePollerConfig>,
    http: Option<FileHttpConfig>,
}

#[derive(Debug, Deserialize)]
struct FileDeviceConfig {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FilePollerConfig {
    poll_interval_ms: Option<u64>,
    throttle_ms: Option<u64>,
    jitter_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FileHttpConfig {
    listen_addr: Option<String>,
}

fn load_file_config(config_path: Option<&str>) -> Result<Option<FileConfig>> {
    let path = match config_path {
        Some(path) => path.to_string(),
        None => match env::var("PIKO_CONFIG") {
            Ok(value) => value,
            Err(_) => return Ok(None),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config file {path}"))?;
    let ext = Path::new(&path).extension().and_then(|value| value.to_str());

    let config = match ext {
        Some("json") => serde_json::from_str(&content).context("parse json config")?,
        _ => toml::from_str(&content).context("parse toml config")?,
    };

    Ok(Some(config))
}

fn apply_file_config(config: &mut CollectorConfig, file: FileConfig) {
    if let Some(device) = file.device {
        if let Some(host) = device.host {
            config.device.host = host;
        }
        if let Some(username) = device.username {
            config.device.username = Some(username);
        }
        if let Some(password) = device.password {
            config.device.password = Some(password);
        }
        if let Some(timeout_ms) = device.timeout_ms {
            config.device.timeout_ms = timeout_ms;
        }
    }

    if let Some(poller) = file.poller {
        if let Some(interval_ms) = poller.poll_interval_ms {
            config.poller.poll_interval = Duration::from_millis(interval_ms);
        }
        if let Some(throttle_ms) = poller.throttle_ms {
            config.poller.throttle = Duration::from_millis(throttle_ms);
        }
        if let Some(jitter_ms) = poller.jitter_ms {
            config.poller.jitter_ms = jitter_ms;
        }
    }

    if let Some(http) = file.http {
        if let Some(listen_addr) = http.listen_addr {
            config.listen_addr = listen_addr;
        }
    }
}

fn parse_env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
