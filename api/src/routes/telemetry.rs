//! Telemetry endpoints.
//!
//! `/predict` scores each sample against the fixed anomaly thresholds;
//! `/summarize` reduces a telemetry window to a one-paragraph summary.

use axum::{extract::rejection::JsonRejection, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use shared::models::{AnomalyPoint, SensorSample, TelemetrySummary};
use shared::triage::{score_samples, summarize_samples};

/// Response body for `/predict`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Per-sample verdicts, in input order.
    pub anomalies: Vec<AnomalyPoint>,
}

/// Error response for rejected telemetry input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TelemetryError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

/// Creates the telemetry routes.
pub fn telemetry_routes() -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/summarize", post(summarize))
}

fn invalid_json(rejection: &JsonRejection) -> (StatusCode, Json<TelemetryError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(TelemetryError {
            error: "invalid_json".to_string(),
            message: rejection.body_text(),
        }),
    )
}

/// Handler for per-sample anomaly scoring.
async fn predict(
    payload: Result<Json<Vec<SensorSample>>, JsonRejection>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<TelemetryError>)> {
    let Json(samples) = payload.map_err(|rejection| invalid_json(&rejection))?;

    let anomalies = score_samples(&samples);
    tracing::debug!(
        samples = samples.len(),
        flagged = anomalies.iter().filter(|p| p.anomaly).count(),
        "Telemetry scored"
    );

    Ok(Json(PredictResponse { anomalies }))
}

/// Handler for telemetry summarization.
///
/// Returns 400 with an `empty_batch` error for an empty sample list.
async fn summarize(
    payload: Result<Json<Vec<SensorSample>>, JsonRejection>,
) -> Result<Json<TelemetrySummary>, (StatusCode, Json<TelemetryError>)> {
    let Json(samples) = payload.map_err(|rejection| invalid_json(&rejection))?;

    let summary = summarize_samples(&samples).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(TelemetryError {
                error: "empty_batch".to_string(),
                message: e.to_string(),
            }),
        )
    })?;

    Ok(Json(summary))
}
