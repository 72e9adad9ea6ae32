//! Data models for the Railsight track-inspection platform.
//!
//! This module contains the core data structures for sensor telemetry,
//! alerts, and triage results.

pub mod alert;
pub mod defect;
pub mod report;
pub mod telemetry;

pub use alert::{Alert, Severity};
pub use defect::DefectAssessment;
pub use report::ReportAnalysis;
pub use telemetry::{AnomalyPoint, SensorSample, TelemetrySummary};
