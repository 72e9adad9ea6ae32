//! Telemetry anomaly scoring and summarizing.

use crate::models::{AnomalyPoint, SensorSample, TelemetrySummary};
use thiserror::Error;

/// Vibration magnitude above which a sample is considered noisy.
pub const VIBRATION_THRESHOLD: f64 = 0.5;

/// Rail temperature in degrees Celsius above which a sample is considered hot.
pub const TEMPERATURE_THRESHOLD: f64 = 50.0;

/// Error returned when an operation needs at least one sample.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("telemetry batch is empty")]
pub struct EmptyTelemetry;

/// Scores each sample against the fixed anomaly thresholds.
///
/// A sample is anomalous when both vibration and temperature exceed
/// their thresholds. The score is a fixed linear blend, not a
/// calibrated probability. Output preserves input order and echoes all
/// input fields.
#[must_use]
pub fn score_samples(samples: &[SensorSample]) -> Vec<AnomalyPoint> {
    samples
        .iter()
        .enumerate()
        .map(|(index, s)| AnomalyPoint {
            index,
            temperature: s.temperature,
            vibration: s.vibration,
            speed: s.speed,
            anomaly: s.vibration > VIBRATION_THRESHOLD && s.temperature > TEMPERATURE_THRESHOLD,
            score: (s.vibration + s.temperature / 100.0) / 2.0,
        })
        .collect()
}

/// Produces a one-paragraph summary of a telemetry window.
///
/// # Errors
///
/// Returns [`EmptyTelemetry`] if `samples` is empty.
pub fn summarize_samples(samples: &[SensorSample]) -> Result<TelemetrySummary, EmptyTelemetry> {
    if samples.is_empty() {
        return Err(EmptyTelemetry);
    }

    let count = samples.len() as f64;
    let avg_temp: f64 = samples.iter().map(|s| s.temperature).sum::<f64>() / count;
    let avg_vib: f64 = samples.iter().map(|s| s.vibration).sum::<f64>() / count;

    let verdict = if samples.iter().any(|s| s.vibration > VIBRATION_THRESHOLD) {
        "High vibration detected. Possible anomaly in tracked data."
    } else {
        "All telemetry within normal ranges."
    };

    Ok(TelemetrySummary {
        summary: format!(
            "Average temperature was {avg_temp:.1}°C. Average vibration: {avg_vib:.3}. {verdict}"
        ),
    })
}
