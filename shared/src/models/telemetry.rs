//! Sensor telemetry data models.
//!
//! Defines the `SensorSample` structure received from trackside sensors
//! and the derived per-sample anomaly and summary results.

use serde::{Deserialize, Serialize};

/// A single reading from a trackside sensor unit.
///
/// Samples are ephemeral: they exist only within one request's input
/// list and are never stored.
///
/// # Example
///
/// ```
/// use shared::models::SensorSample;
///
/// let sample = SensorSample::new(24.5, 0.12, 81.0);
/// assert_eq!(sample.temperature, 24.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    /// Rail temperature in degrees Celsius.
    pub temperature: f64,

    /// Vibration magnitude (unitless).
    pub vibration: f64,

    /// Train speed at the time of the reading.
    pub speed: f64,
}

impl SensorSample {
    /// Creates a new sensor sample.
    #[must_use]
    pub fn new(temperature: f64, vibration: f64, speed: f64) -> Self {
        Self {
            temperature,
            vibration,
            speed,
        }
    }
}

/// Per-sample anomaly verdict produced by the anomaly scorer.
///
/// Echoes every input field so callers can render results without
/// joining back to their request, and carries the positional `index`
/// so ordering is explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Position of the sample in the input list.
    pub index: usize,

    /// Rail temperature in degrees Celsius, echoed from the input.
    pub temperature: f64,

    /// Vibration magnitude, echoed from the input.
    pub vibration: f64,

    /// Train speed, echoed from the input.
    pub speed: f64,

    /// Whether the sample crossed both anomaly thresholds.
    pub anomaly: bool,

    /// Heuristic anomaly score (not a calibrated probability).
    pub score: f64,
}

/// Human-readable summary of a telemetry window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySummary {
    /// The summary sentence(s).
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_sample_new() {
        let sample = SensorSample::new(55.0, 0.6, 90.0);
        assert_eq!(sample.temperature, 55.0);
        assert_eq!(sample.vibration, 0.6);
        assert_eq!(sample.speed, 90.0);
    }

    #[test]
    fn test_sensor_sample_deserialize() {
        let json = r#"{"temperature": 22.1, "vibration": 0.05, "speed": 74.2}"#;
        let sample: SensorSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.temperature, 22.1);
        assert_eq!(sample.vibration, 0.05);
        assert_eq!(sample.speed, 74.2);
    }

    #[test]
    fn test_anomaly_point_serialize() {
        let point = AnomalyPoint {
            index: 2,
            temperature: 51.0,
            vibration: 0.55,
            speed: 80.0,
            anomaly: true,
            score: 0.53,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["anomaly"], true);
    }
}
