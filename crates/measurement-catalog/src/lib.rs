use serde::Serialize;
use types::{DisplayValue, RawReading};

pub mod convert;
mod table;

use table::DEFINITIONS;

/// Semantic category of a measurement, used by hosts to pick a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Power,
    Energy,
    Current,
    Voltage,
    Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
    TotalIncreasing,
}

/// How a raw device reading turns into a display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Converter {
    /// Parse as float, round to two decimals.
    Rounded,
    /// Parse as float, divide by 1000 (W to kW, Wh to kWh), round to two decimals.
    Kilo,
    /// Map the integer inverter state code to its label.
    InverterState,
}

impl Converter {
    pub fn apply(self, raw: &RawReading) -> DisplayValue {
        match self {
            Converter::Rounded => convert::rounded(raw),
            Converter::Kilo => convert::kilo(raw),
            Converter::InverterState => convert::inverter_state(raw),
        }
    }
}

/// One data point exposed by the inverter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementDefinition {
    /// dxsId the device uses for this value.
    pub id: u32,
    pub key: &'static str,
    pub name: &'static str,
    pub unit: Option<&'static str>,
    pub device_class: Option<DeviceClass>,
    pub state_class: StateClass,
    pub icon: &'static str,
    pub converter: Converter,
}

impl MeasurementDefinition {
    pub fn unique_id(&self) -> String {
        format!("{}_{}", self.key, self.id)
    }

    pub fn convert(&self, raw: &RawReading) -> DisplayValue {
        self.converter.apply(raw)
    }
}

const fn ids_unique(definitions: &[MeasurementDefinition]) -> bool {
    let mut i = 0;
    while i < definitions.len() {
        let mut j = i + 1;
        while j < definitions.len() {
            if definitions[i].id == definitions[j].id {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ids_unique(DEFINITIONS), "duplicate dxsId in measurement table");

/// All known measurements, in registration order.
pub fn measurements() -> &'static [MeasurementDefinition] {
    DEFINITIONS
}

pub fn lookup(id: u32) -> Option<&'static MeasurementDefinition> {
    DEFINITIONS.iter().find(|definition| definition.id == id)
}

pub fn ids() -> impl Iterator<Item = u32> {
    DEFINITIONS.iter().map(|definition| definition.id)
}
