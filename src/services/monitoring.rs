use chrono::NaiveDateTime;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::machine::{ApiMachine, ApiSensorPoint, MachineData, SensorPoint};

/// The timestamp format used by the monitoring API.
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
/// The time-of-day format used by the presentation layer.
const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// Normalizes a raw sensor series for presentation.
///
/// Unparseable timestamps degrade to `00:00` instead of failing the whole
/// series, matching how the dashboard tolerates dirty upstream data.
fn transform_series(series: Vec<ApiSensorPoint>) -> Vec<SensorPoint> {
    series
        .into_iter()
        .map(|point| {
            let time = match NaiveDateTime::parse_from_str(&point.timestamp, API_TIMESTAMP_FORMAT)
            {
                Ok(ts) => ts.format(DISPLAY_TIME_FORMAT).to_string(),
                Err(_) => {
                    tracing::warn!("⚠️ Invalid timestamp in sensor series: {}", point.timestamp);
                    "00:00".to_string()
                }
            };

            SensorPoint {
                time,
                value: point.value,
            }
        })
        .collect()
}

/// Fetches and normalizes the telemetry of a single machine.
///
/// # Arguments
///
/// * `http` - The shared HTTP client.
/// * `base_url` - The base URL of the monitoring API.
/// * `machine_id` - The numeric identifier of the machine.
///
/// # Returns
///
/// A `Result` containing the machine's `MachineData`.
pub async fn get_machine_data(
    http: &Client,
    base_url: &str,
    machine_id: i64,
) -> Result<MachineData> {
    tracing::debug!("📡 Fetching sensor data for machine {}", machine_id);

    let machines: Vec<ApiMachine> = http
        .get(format!("{}/sensores", base_url))
        .query(&[("id", machine_id)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let machine = machines
        .into_iter()
        .find(|m| m.id == machine_id)
        .ok_or(AppError::NotFound)?;

    tracing::debug!("✅ Machine {} found: {}", machine_id, machine.name);

    Ok(MachineData {
        name: machine.name,
        device_id: machine.device_id,
        color: machine.color,
        rpm: transform_series(machine.rpm),
        temperature: transform_series(machine.temperatura),
        oil_level: transform_series(machine.nivel_oleo),
        current: transform_series(machine.corrente),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: &str, value: f64) -> ApiSensorPoint {
        ApiSensorPoint {
            timestamp: timestamp.to_string(),
            value,
        }
    }

    #[test]
    fn formats_timestamps_as_time_of_day() {
        let series = transform_series(vec![
            point("2025-01-07 19:05", 1450.0),
            point("2025-01-07 19:10", 1462.5),
        ]);

        assert_eq!(
            series,
            vec![
                SensorPoint { time: "19:05".to_string(), value: 1450.0 },
                SensorPoint { time: "19:10".to_string(), value: 1462.5 },
            ]
        );
    }

    #[test]
    fn dirty_timestamps_degrade_to_midnight() {
        let series = transform_series(vec![point("not-a-timestamp", 73.2)]);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time, "00:00");
        assert_eq!(series[0].value, 73.2);
    }

    #[test]
    fn empty_series_stays_empty() {
        assert!(transform_series(Vec::new()).is_empty());
    }
}
