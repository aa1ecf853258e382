use crate::{Converter, DeviceClass, MeasurementDefinition, StateClass};

pub(crate) const DEFINITIONS: &[MeasurementDefinition] = &[
    MeasurementDefinition {
        id: 33556736,
        key: "kostal_piko_total_dc_input",
        name: "Kostal PIKO Total DC Input",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:solar-panel",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 67109120,
        key: "kostal_piko_grid_output_power",
        name: "Kostal PIKO Grid Output Power",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:solar-power",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 83888128,
        key: "kostal_piko_current_self_consumption",
        name: "Kostal PIKO Current Self Consumption",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 33555201,
        key: "kostal_piko_dc_input_1_current",
        name: "Kostal PIKO DC Input 1 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555202,
        key: "kostal_piko_dc_input_1_voltage",
        name: "Kostal PIKO DC Input 1 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555203,
        key: "kostal_piko_dc_input_1_power",
        name: "Kostal PIKO DC Input 1 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555457,
        key: "kostal_piko_dc_input_2_current",
        name: "Kostal PIKO DC Input 2 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555458,
        key: "kostal_piko_dc_input_2_voltage",
        name: "Kostal PIKO DC Input 2 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555459,
        key: "kostal_piko_dc_input_2_power",
        name: "Kostal PIKO DC Input 2 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555713,
        key: "kostal_piko_dc_input_3_current",
        name: "Kostal PIKO DC Input 3 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555714,
        key: "kostal_piko_dc_input_3_voltage",
        name: "Kostal PIKO DC Input 3 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 33555715,
        key: "kostal_piko_dc_input_3_power",
        name: "Kostal PIKO DC Input 3 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67110400,
        key: "kostal_piko_grid_frequency",
        name: "Kostal PIKO Grid Frequency",
        unit: Some("Hz"),
        device_class: Some(DeviceClass::Frequency),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109377,
        key: "kostal_piko_phase_1_current",
        name: "Kostal PIKO Phase 1 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109378,
        key: "kostal_piko_phase_1_voltage",
        name: "Kostal PIKO Phase 1 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109379,
        key: "kostal_piko_phase_1_power",
        name: "Kostal PIKO Phase 1 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109633,
        key: "kostal_piko_phase_2_current",
        name: "Kostal PIKO Phase 2 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109634,
        key: "kostal_piko_phase_2_voltage",
        name: "Kostal PIKO Phase 2 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109635,
        key: "kostal_piko_phase_2_power",
        name: "Kostal PIKO Phase 2 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109889,
        key: "kostal_piko_phase_3_current",
        name: "Kostal PIKO Phase 3 Current",
        unit: Some("A"),
        device_class: Some(DeviceClass::Current),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109890,
        key: "kostal_piko_phase_3_voltage",
        name: "Kostal PIKO Phase 3 Voltage",
        unit: Some("V"),
        device_class: Some(DeviceClass::Voltage),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 67109891,
        key: "kostal_piko_phase_3_power",
        name: "Kostal PIKO Phase 3 Power",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251658754,
        key: "kostal_piko_yield_day",
        name: "Kostal PIKO Yield Day",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 251659010,
        key: "kostal_piko_home_consumption_day",
        name: "Kostal PIKO Home Consumption Day",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 251659266,
        key: "kostal_piko_own_consumption_day",
        name: "Kostal PIKO Own Consumption Day",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 251659278,
        key: "kostal_piko_own_consumption_quota_day",
        name: "Kostal PIKO Own Consumption Quota Day",
        unit: Some("%"),
        device_class: None,
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251659279,
        key: "kostal_piko_autarky_day",
        name: "Kostal PIKO Autarky Day",
        unit: Some("%"),
        device_class: None,
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251658753,
        key: "kostal_piko_yield_total",
        name: "Kostal PIKO Yield Total",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251659009,
        key: "kostal_piko_home_consumption_total",
        name: "Kostal PIKO Home Consumption Total",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251659265,
        key: "kostal_piko_own_consumption_total",
        name: "Kostal PIKO Own Consumption Total",
        unit: Some("kWh"),
        device_class: Some(DeviceClass::Energy),
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251659280,
        key: "kostal_piko_own_consumption_quota_total",
        name: "Kostal PIKO Own Consumption Quota Total",
        unit: Some("%"),
        device_class: None,
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 251659281,
        key: "kostal_piko_autarky_total",
        name: "Kostal PIKO Autarky Total",
        unit: Some("%"),
        device_class: None,
        state_class: StateClass::TotalIncreasing,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    // 2 = starting, DC still too low
    MeasurementDefinition {
        id: 16780032,
        key: "kostal_piko_inverter_state",
        name: "Kostal PIKO Inverter State",
        unit: None,
        device_class: None,
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::InverterState,
    },
    MeasurementDefinition {
        id: 251658496,
        key: "kostal_piko_uptime",
        name: "Kostal PIKO Uptime",
        unit: Some("h"),
        device_class: None,
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 83886336,
        key: "kostal_piko_home_consumption_solar",
        name: "Kostal PIKO Home Consumption Solar",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 83886592,
        key: "kostal_piko_home_consumption_battery",
        name: "Kostal PIKO Home Consumption Battery",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 83886848,
        key: "kostal_piko_home_consumption_grid",
        name: "Kostal PIKO Home Consumption Grid",
        unit: Some("kW"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Kilo,
    },
    MeasurementDefinition {
        id: 83887106,
        key: "kostal_piko_home_consumption_phase_1",
        name: "Kostal PIKO Home Consumption Phase 1",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 83887362,
        key: "kostal_piko_home_consumption_phase_2",
        name: "Kostal PIKO Home Consumption Phase 2",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
    MeasurementDefinition {
        id: 83887618,
        key: "kostal_piko_home_consumption_phase_3",
        name: "Kostal PIKO Home Consumption Phase 3",
        unit: Some("W"),
        device_class: Some(DeviceClass::Power),
        state_class: StateClass::Measurement,
        icon: "mdi:power-plug",
        converter: Converter::Rounded,
    },
];
