//! Synthetic alert feed.
//!
//! Draws 1-3 alerts with replacement from a fixed catalog, timestamped
//! with the current instant. The feed is demo scaffolding and carries
//! no relation to real telemetry state.

use crate::models::{Alert, Severity};
use rand::Rng;

/// The fixed message/severity catalog alerts are drawn from.
pub const ALERT_CATALOG: [(&str, Severity); 6] = [
    ("Possible track fault detected", Severity::High),
    ("Anomaly score: 92%", Severity::Medium),
    ("High vibration on approach to junction", Severity::Medium),
    ("Rail temperature above seasonal norm", Severity::Low),
    ("Obstruction reported near level crossing", Severity::High),
    ("Trackside sensor battery low", Severity::Low),
];

/// Generates 1-3 alerts using the thread-local RNG.
#[must_use]
pub fn generate_alerts() -> Vec<Alert> {
    generate_alerts_with_rng(&mut rand::thread_rng())
}

/// Generates 1-3 alerts using the provided RNG.
///
/// Seedable entry point for deterministic tests.
pub fn generate_alerts_with_rng<R: Rng>(rng: &mut R) -> Vec<Alert> {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| {
            let (message, severity) = ALERT_CATALOG[rng.gen_range(0..ALERT_CATALOG.len())];
            Alert::new(message, severity)
        })
        .collect()
}
