use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use types::RawReading;

use crate::ClientError;

const BODY_EXCERPT_CHARS: usize = 256;

#[derive(Debug, Deserialize)]
struct DxsEnvelope {
    #[serde(rename = "dxsEntries")]
    entries: Vec<DxsEntry>,
}

#[derive(Debug, Deserialize)]
struct DxsEntry {
    #[serde(rename = "dxsId")]
    dxs_id: i64,
    value: Value,
}

/// Pulls the value for `dxs_id` out of a `dxs.json` response body.
pub fn extract_reading(body: &str, dxs_id: u32) -> Result<RawReading, ClientError> {
    let envelope = decode_envelope(body)?;
    let entry = envelope
        .entries
        .into_iter()
        .find(|entry| entry.dxs_id == i64::from(dxs_id))
        .ok_or_else(|| ClientError::MissingEntry {
            dxs_id,
            body: excerpt(body),
        })?;
    to_reading(dxs_id, entry.value)
}

/// Decodes every entry of a `dxs.json` response body. Entries with an
/// out-of-range id or a non-scalar value are skipped.
pub fn decode_readings(body: &str) -> Result<HashMap<u32, RawReading>, ClientError> {
    let envelope = decode_envelope(body)?;
    let mut readings = HashMap::with_capacity(envelope.entries.len());
    for entry in envelope.entries {
        let Ok(dxs_id) = u32::try_from(entry.dxs_id) else {
            continue;
        };
        match to_reading(dxs_id, entry.value) {
            Ok(reading) => {
                readings.insert(dxs_id, reading);
            }
            Err(err) => warn!(dxs_id, error = %err, "dxs entry skipped"),
        }
    }
    Ok(readings)
}

fn decode_envelope(body: &str) -> Result<DxsEnvelope, ClientError> {
    let value: Value = serde_json::from_str(body).map_err(|source| ClientError::InvalidJson {
        source,
        body: excerpt(body),
    })?;
    serde_json::from_value(value).map_err(|err| ClientError::MissingEnvelope {
        reason: err.to_string(),
        body: excerpt(body),
    })
}

fn to_reading(dxs_id: u32, value: Value) -> Result<RawReading, ClientError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(RawReading::Number)
            .ok_or_else(|| ClientError::UnsupportedValue {
                dxs_id,
                value: number.to_string(),
            }),
        Value::String(text) => Ok(RawReading::Text(text)),
        other => Err(ClientError::UnsupportedValue {
            dxs_id,
            value: other.to_string(),
        }),
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        return body.to_string();
    }
    let mut out: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}
