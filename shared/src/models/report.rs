//! Inspection report triage result model.

use serde::{Deserialize, Serialize};

/// Structured triage result for a free-text inspection report.
///
/// # Example
///
/// ```
/// use shared::triage::parse_report;
///
/// let analysis = parse_report("urgent crack near zone 4");
/// assert!(analysis.urgency_score >= 0.95);
/// assert!(analysis.extracted_entities.contains(&"Zone 4".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    /// Truncated preview of the report text (first 40 characters).
    pub summary: String,

    /// Heuristic urgency in `[0, 1]` derived from keyword presence.
    pub urgency_score: f64,

    /// Track entities mentioned in the report.
    pub extracted_entities: Vec<String>,

    /// Recommended follow-up actions.
    pub suggested_actions: Vec<String>,
}
