use std::fmt;

use serde::{Deserialize, Serialize};

/// Untyped value reported by the inverter for a single dxsId.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawReading::Number(value) => write!(f, "{value}"),
            RawReading::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for RawReading {
    fn from(value: f64) -> Self {
        RawReading::Number(value)
    }
}

impl From<&str> for RawReading {
    fn from(value: &str) -> Self {
        RawReading::Text(value.to_string())
    }
}

impl From<String> for RawReading {
    fn from(value: String) -> Self {
        RawReading::Text(value)
    }
}

/// Converted value handed to the host.
///
/// `Raw` carries a reading that could not be parsed so operators still see
/// what the device sent. `Unrecognized` marks an enumeration code outside the
/// known table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayValue {
    Number(f64),
    State(String),
    Unrecognized(i64),
    Raw(RawReading),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(value) => write!(f, "{value}"),
            DisplayValue::State(label) => f.write_str(label),
            DisplayValue::Unrecognized(code) => write!(f, "unrecognized({code})"),
            DisplayValue::Raw(raw) => write!(f, "{raw}"),
        }
    }
}

/// Last known state of one measurement as seen by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementState {
    pub last_value: Option<DisplayValue>,
    pub available: bool,
    /// Wall clock of the last network attempt, unix milliseconds.
    pub last_fetch_at_ms: Option<u64>,
}

impl MeasurementState {
    pub fn unavailable() -> Self {
        Self::default()
    }
}
