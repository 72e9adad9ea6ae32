//! Inspection report triage rules.
//!
//! Classifies free-text operator reports into an urgency score plus
//! entity and action lists via keyword lookup. Rules are checked
//! independently: later rules can raise but never lower the urgency,
//! except the explicit "all clear" rule which force-lowers it and
//! overwrites the actions.

use crate::models::ReportAnalysis;
use regex::Regex;
use std::sync::LazyLock;

/// Number of characters of the report echoed back as the summary.
const SUMMARY_LEN: usize = 40;

static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"zone\s+(\d+)").expect("valid zone regex"));

/// Matches "ok" as a whole word so words like "broken" do not trigger
/// the all-clear rule.
static OK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bok\b").expect("valid ok regex"));

/// Runs keyword triage over a free-text inspection report.
///
/// # Example
///
/// ```
/// use shared::triage::parse_report;
///
/// let analysis = parse_report("urgent bolt issue in zone 7");
/// assert!(analysis.urgency_score >= 0.95);
/// assert!(analysis.extracted_entities.contains(&"Bolts".to_string()));
/// assert!(analysis.extracted_entities.contains(&"Zone 7".to_string()));
/// ```
#[must_use]
pub fn parse_report(text: &str) -> ReportAnalysis {
    let lower = text.to_lowercase();

    let mut urgency_score: f64 = 0.2;
    let mut entities: Vec<String> = Vec::new();
    let mut actions: Vec<String> = Vec::new();

    if lower.contains("crack") {
        entities.push("Crack".to_string());
        urgency_score = urgency_score.max(0.9);
        actions.push("Dispatch team".to_string());
        actions.push("Limit speed".to_string());
    }

    if let Some(caps) = ZONE_RE.captures(&lower) {
        entities.push(format!("Zone {}", &caps[1]));
    }

    if lower.contains("bolt") || lower.contains("joint") {
        entities.push("Bolts".to_string());
        urgency_score = urgency_score.max(0.7);
        actions.push("Tighten bolts".to_string());
    }

    if lower.contains("urgent") || lower.contains("immediate") {
        urgency_score = urgency_score.max(0.95);
    }

    // "All clear" phrasing overrides everything raised above.
    if lower.contains("no issue") || lower.contains("routine") || OK_RE.is_match(&lower) {
        urgency_score = 0.1;
        actions = vec!["Routine monitoring".to_string()];
    }

    if entities.is_empty() {
        entities.push("General Inspection".to_string());
    }
    if actions.is_empty() {
        actions.push("Monitor track".to_string());
    }

    ReportAnalysis {
        summary: summarize_text(text),
        urgency_score,
        extracted_entities: entities,
        suggested_actions: actions,
    }
}

/// First [`SUMMARY_LEN`] characters of the report, ellipsized.
fn summarize_text(text: &str) -> String {
    let mut summary: String = text.chars().take(SUMMARY_LEN).collect();
    summary.push_str("...");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crack_report() {
        let analysis = parse_report("Visible crack on the outer rail");
        assert_eq!(analysis.urgency_score, 0.9);
        assert_eq!(analysis.extracted_entities, vec!["Crack"]);
        assert_eq!(
            analysis.suggested_actions,
            vec!["Dispatch team", "Limit speed"]
        );
    }

    #[test]
    fn test_zone_extraction() {
        let analysis = parse_report("Inspection complete in zone 12, nothing found");
        assert!(analysis
            .extracted_entities
            .contains(&"Zone 12".to_string()));
    }

    #[test]
    fn test_bolt_report() {
        let analysis = parse_report("loose bolt near the junction");
        assert_eq!(analysis.urgency_score, 0.7);
        assert!(analysis.extracted_entities.contains(&"Bolts".to_string()));
        assert!(analysis
            .suggested_actions
            .contains(&"Tighten bolts".to_string()));
    }

    #[test]
    fn test_urgent_bolt_in_zone() {
        let analysis = parse_report("urgent bolt issue in zone 7");
        assert!(analysis.urgency_score >= 0.95);
        assert!(analysis.extracted_entities.contains(&"Bolts".to_string()));
        assert!(analysis.extracted_entities.contains(&"Zone 7".to_string()));
    }

    #[test]
    fn test_all_clear_overrides_urgency() {
        let analysis = parse_report("urgent crack reported earlier, now routine");
        assert_eq!(analysis.urgency_score, 0.1);
        assert_eq!(analysis.suggested_actions, vec!["Routine monitoring"]);
        // Entities found before the reset are kept.
        assert!(analysis.extracted_entities.contains(&"Crack".to_string()));
    }

    #[test]
    fn test_ok_matches_whole_word_only() {
        let analysis = parse_report("broken fastener found");
        assert_ne!(analysis.urgency_score, 0.1);

        let analysis = parse_report("everything looks ok");
        assert_eq!(analysis.urgency_score, 0.1);
    }

    #[test]
    fn test_defaults_when_nothing_matches() {
        let analysis = parse_report("weather was cloudy during the walk");
        assert_eq!(analysis.urgency_score, 0.2);
        assert_eq!(analysis.extracted_entities, vec!["General Inspection"]);
        assert_eq!(analysis.suggested_actions, vec!["Monitor track"]);
    }

    #[test]
    fn test_summary_truncates_to_40_chars() {
        let text = "a".repeat(100);
        let analysis = parse_report(&text);
        assert_eq!(analysis.summary.len(), 43);
        assert!(analysis.summary.ends_with("..."));
    }

    #[test]
    fn test_summary_of_short_text() {
        let analysis = parse_report("short");
        assert_eq!(analysis.summary, "short...");
    }
}
