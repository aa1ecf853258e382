//! Converters from raw device readings to display values.
//!
//! None of these fail. A reading that cannot be parsed is returned as
//! [`DisplayValue::Raw`] so a single malformed value never aborts a refresh.

use tracing::debug;
use types::{DisplayValue, RawReading};

const INVERTER_STATES: [&str; 5] = ["Off", "Idle", "Starting", "Input (MPP)", "Input (limited)"];

pub fn rounded(raw: &RawReading) -> DisplayValue {
    match parse_float(raw) {
        Some(value) => DisplayValue::Number(round2(value)),
        None => unparsed(raw),
    }
}

pub fn kilo(raw: &RawReading) -> DisplayValue {
    match parse_float(raw) {
        Some(value) => DisplayValue::Number(round2(value / 1000.0)),
        None => unparsed(raw),
    }
}

pub fn inverter_state(raw: &RawReading) -> DisplayValue {
    let Some(code) = parse_int(raw) else {
        return unparsed(raw);
    };

    match usize::try_from(code).ok().and_then(|index| INVERTER_STATES.get(index)) {
        Some(label) => DisplayValue::State((*label).to_string()),
        None => DisplayValue::Unrecognized(code),
    }
}

// Rounds the exact binary value half-to-even, without scaling by 100 first.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse::<f64>().unwrap_or(value)
}

fn parse_float(raw: &RawReading) -> Option<f64> {
    match raw {
        RawReading::Number(value) => Some(*value),
        RawReading::Text(text) => text.trim().parse::<f64>().ok(),
    }
}

// JSON numbers truncate toward zero; strings must be integral.
fn parse_int(raw: &RawReading) -> Option<i64> {
    match raw {
        RawReading::Number(value) if value.is_finite() => Some(value.trunc() as i64),
        RawReading::Number(_) => None,
        RawReading::Text(text) => text.trim().parse::<i64>().ok(),
    }
}

fn unparsed(raw: &RawReading) -> DisplayValue {
    debug!(raw = %raw, "reading left unconverted");
    DisplayValue::Raw(raw.clone())
}
