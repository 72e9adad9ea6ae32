//! Railsight Shared Library
//!
//! This crate contains the data models and triage logic used across
//! the Railsight track-inspection platform.
//!
//! # Modules
//!
//! - [`models`] - Data models for telemetry samples, alerts, and triage results
//! - [`triage`] - Rule-based triage logic for images, reports, and telemetry
//!
//! # Example
//!
//! ```
//! use shared::models::SensorSample;
//! use shared::triage::score_samples;
//!
//! let samples = vec![SensorSample::new(62.0, 0.7, 88.0)];
//! let points = score_samples(&samples);
//!
//! assert!(points[0].anomaly);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod triage;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
pub use validator;
