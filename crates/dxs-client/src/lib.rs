use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, warn};

use types::RawReading;

mod envelope;

pub use envelope::{decode_readings, extract_reading};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const DXS_PATH: &str = "/api/dxs.json";
const DXS_QUERY_KEY: &str = "dxsEntries";

/// Connection settings for one inverter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host name or address, optionally with `:port`. No scheme, no path.
    pub host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Per-request timeout in milliseconds, covering connect and body read.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: None,
            password: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Coarse classification callers use to decide how to react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request never completed: connect failure, reset, timeout.
    Transport,
    /// A response arrived but did not carry the requested reading.
    Protocol,
    /// The client could not be set up.
    Config,
}

impl ErrorClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::Transport => "transport",
            ErrorClass::Protocol => "protocol",
            ErrorClass::Config => "config",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid device host {0:?}")]
    InvalidHost(String),
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("http transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response is not valid json ({source}): {body}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("response does not match the dxsEntries envelope ({reason}): {body}")]
    MissingEnvelope { reason: String, body: String },
    #[error("response did not contain dxsId {dxs_id}: {body}")]
    MissingEntry { dxs_id: u32, body: String },
    #[error("dxsId {dxs_id} carries unsupported value {value}")]
    UnsupportedValue { dxs_id: u32, value: String },
}

impl ClientError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ClientError::InvalidHost(_) | ClientError::Build(_) => ErrorClass::Config,
            ClientError::Timeout { .. } | ClientError::Transport(_) => ErrorClass::Transport,
            ClientError::InvalidJson { .. }
            | ClientError::MissingEnvelope { .. }
            | ClientError::MissingEntry { .. }
            | ClientError::UnsupportedValue { .. } => ErrorClass::Protocol,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.class() == ErrorClass::Transport
    }

    pub fn is_protocol(&self) -> bool {
        self.class() == ErrorClass::Protocol
    }
}

/// Anything that can produce a raw reading for a dxsId.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    async fn fetch(&self, dxs_id: u32) -> Result<RawReading, ClientError>;
}

/// HTTP client for the inverter's `dxs.json` endpoint.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DxsClient {
    config: ClientConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl DxsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = endpoint_url(&config.host)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues one GET for `dxs_id` and returns its value.
    pub async fn fetch(&self, dxs_id: u32) -> Result<RawReading, ClientError> {
        let body = self.get(&[dxs_id]).await?;
        match extract_reading(&body, dxs_id) {
            Ok(reading) => {
                debug!(dxs_id, reading = %reading, "dxs read ok");
                Ok(reading)
            }
            Err(err) => {
                warn!(dxs_id, error = %err, "dxs response rejected");
                Err(err)
            }
        }
    }

    /// Issues one GET carrying every id in `dxs_ids`. Ids the device leaves
    /// out are absent from the returned map.
    pub async fn fetch_many(
        &self,
        dxs_ids: &[u32],
    ) -> Result<HashMap<u32, RawReading>, ClientError> {
        if dxs_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let body = self.get(dxs_ids).await?;
        let readings = decode_readings(&body).map_err(|err| {
            warn!(requested = dxs_ids.len(), error = %err, "dxs batch response rejected");
            err
        })?;
        debug!(
            requested = dxs_ids.len(),
            received = readings.len(),
            "dxs batch read ok"
        );
        Ok(readings)
    }

    async fn get(&self, dxs_ids: &[u32]) -> Result<String, ClientError> {
        let params: Vec<(&str, u32)> = dxs_ids.iter().map(|id| (DXS_QUERY_KEY, *id)).collect();
        let mut request = self.http.get(self.endpoint.clone()).query(&params);
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_ref());
        }

        let response = request.send().await.map_err(|err| self.transport_error(err))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| self.transport_error(err))?;
        debug!(
            host = %self.config.host,
            status = status.as_u16(),
            bytes = body.len(),
            "dxs response received"
        );
        Ok(body)
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        let err = if err.is_timeout() {
            ClientError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            ClientError::Transport(err)
        };
        warn!(host = %self.config.host, error = %err, "dxs request failed");
        err
    }
}

#[async_trait]
impl ReadingSource for DxsClient {
    async fn fetch(&self, dxs_id: u32) -> Result<RawReading, ClientError> {
        DxsClient::fetch(self, dxs_id).await
    }
}

fn endpoint_url(host: &str) -> Result<Url, ClientError> {
    let trimmed = host.trim();
    if trimmed.is_empty()
        || trimmed.contains("://")
        || trimmed.contains('/')
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(ClientError::InvalidHost(host.to_string()));
    }

    Url::parse(&format!("http://{trimmed}{DXS_PATH}"))
        .map_err(|_| ClientError::InvalidHost(host.to_string()))
}
