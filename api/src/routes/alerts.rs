//! Alert feed endpoint.

use axum::{routing::get, Json, Router};
use shared::models::Alert;
use shared::triage::generate_alerts;

/// Creates the alert feed routes.
pub fn alert_routes() -> Router {
    Router::new().route("/alerts", get(alerts))
}

/// Handler for the alert feed.
///
/// Returns 1-3 synthetic alerts drawn from the fixed catalog, all
/// timestamped with the current instant.
async fn alerts() -> Json<Vec<Alert>> {
    let alerts = generate_alerts();
    tracing::debug!(count = alerts.len(), "Alert feed generated");
    Json(alerts)
}
