//! Inspection report triage endpoint.

use axum::{extract::rejection::JsonRejection, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use shared::models::ReportAnalysis;
use shared::triage::parse_report;
use validator::Validate;

/// Request body for report triage.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportRequest {
    /// The free-text inspection report.
    #[validate(length(min = 1, message = "Report text cannot be empty"))]
    pub report: String,
}

/// Error response for a rejected report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

/// Creates the report triage routes.
pub fn report_routes() -> Router {
    Router::new().route("/parse-report", post(triage_report))
}

/// Handler for report triage.
///
/// Returns 200 with the analysis, or 400 for malformed JSON or an
/// empty report.
async fn triage_report(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportAnalysis>, (StatusCode, Json<ReportError>)> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ReportError {
                error: "invalid_json".to_string(),
                message: rejection.body_text(),
            }),
        )
    })?;

    if let Err(e) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ReportError {
                error: "validation_failed".to_string(),
                message: e.to_string(),
            }),
        ));
    }

    let analysis = parse_report(&request.report);
    tracing::debug!(
        urgency_score = analysis.urgency_score,
        entities = analysis.extracted_entities.len(),
        "Report triaged"
    );

    Ok(Json(analysis))
}
