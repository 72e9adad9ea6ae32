//! Rule-based triage logic for the Railsight platform.
//!
//! Every function here is a single pass over its input with fixed
//! thresholds: filename and keyword matching, a colour-mask ratio, one
//! edge-magnitude mean, and arithmetic averages. There is no learned
//! model and no state shared between calls.

pub mod alerts;
pub mod image;
pub mod report;
pub mod telemetry;

pub use alerts::{generate_alerts, generate_alerts_with_rng, ALERT_CATALOG};
pub use self::image::{assess_image, ImageTriageError};
pub use report::parse_report;
pub use telemetry::{score_samples, summarize_samples, EmptyTelemetry};
