use serde::{Deserialize, Serialize};

/// A raw sensor reading as returned by the monitoring API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSensorPoint {
    /// The timestamp of the reading, formatted `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    /// The measured value.
    pub value: f64,
}

/// A machine record as returned by the monitoring API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMachine {
    /// The machine's numeric identifier.
    pub id: i64,
    /// The machine's display name.
    pub name: String,
    /// The identifier of the device attached to the machine.
    pub device_id: String,
    /// The display color assigned to the machine.
    pub color: String,
    /// Temperature readings.
    #[serde(default)]
    pub temperatura: Vec<ApiSensorPoint>,
    /// Oil level readings.
    #[serde(default, rename = "nivelOleo")]
    pub nivel_oleo: Vec<ApiSensorPoint>,
    /// Electric current readings.
    #[serde(default)]
    pub corrente: Vec<ApiSensorPoint>,
    /// RPM readings.
    #[serde(default)]
    pub rpm: Vec<ApiSensorPoint>,
}

/// A sensor reading normalized for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorPoint {
    /// The time of day of the reading, formatted `HH:MM`.
    pub time: String,
    /// The measured value.
    pub value: f64,
}

/// Machine telemetry normalized for presentation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineData {
    /// The machine's display name.
    pub name: String,
    /// The identifier of the device attached to the machine.
    pub device_id: String,
    /// The display color assigned to the machine.
    pub color: String,
    /// RPM readings.
    pub rpm: Vec<SensorPoint>,
    /// Temperature readings.
    pub temperature: Vec<SensorPoint>,
    /// Oil level readings.
    pub oil_level: Vec<SensorPoint>,
    /// Electric current readings.
    pub current: Vec<SensorPoint>,
}
