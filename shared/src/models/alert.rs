//! Alert data model.
//!
//! Defines the `Alert` structure returned by the alert feed and its
//! severity levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational, no action required.
    Low,
    /// Worth a look during the next inspection round.
    Medium,
    /// Requires prompt operator attention.
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A track-condition alert shown in the operator dashboard feed.
///
/// Alerts are generated on demand and never stored.
///
/// # Example
///
/// ```
/// use shared::models::{Alert, Severity};
///
/// let alert = Alert::new("Possible track fault detected", Severity::High);
/// assert_eq!(alert.severity, Severity::High);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// The alert message text.
    pub message: String,

    /// When the alert was generated (RFC 3339, UTC).
    pub time: DateTime<Utc>,

    /// Alert severity.
    pub severity: Severity,
}

impl Alert {
    /// Creates a new alert timestamped with the current instant.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            time: Utc::now(),
            severity,
        }
    }
}
