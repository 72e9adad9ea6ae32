//! Image triage result model.

use serde::{Deserialize, Serialize};

/// The outcome of running an uploaded track image through the triage
/// rules.
///
/// `defect_probability` is a fixed confidence attached to whichever
/// rule fired, not a statistically derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectAssessment {
    /// Confidence in `[0, 1]` for the matched rule.
    pub defect_probability: f64,

    /// Human-readable defect label.
    ///
    /// On analysis failure this carries the error text prefixed with
    /// `"Could not analyze: "`, with `defect_probability` set to 0.
    /// Downstream dashboards rely on that shape.
    pub defect_type: String,
}

impl DefectAssessment {
    /// Creates a new assessment.
    #[must_use]
    pub fn new(defect_probability: f64, defect_type: impl Into<String>) -> Self {
        Self {
            defect_probability,
            defect_type: defect_type.into(),
        }
    }

    /// Creates the degraded assessment used when analysis fails.
    #[must_use]
    pub fn could_not_analyze(error: impl std::fmt::Display) -> Self {
        Self {
            defect_probability: 0.0,
            defect_type: format!("Could not analyze: {error}"),
        }
    }
}
