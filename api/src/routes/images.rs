//! Image triage endpoint.
//!
//! Accepts a multipart track-image upload and returns a defect
//! assessment. Analysis failures do not fail the request: the response
//! is still 200 with probability 0 and the error text in the label,
//! which is the contract the operator dashboard was built against.

use axum::extract::Multipart;
use axum::{routing::post, Json, Router};
use shared::models::DefectAssessment;
use shared::triage::assess_image;

/// Creates the image triage routes.
pub fn image_routes() -> Router {
    Router::new().route("/analyze-image", post(analyze_image))
}

/// Handler for image triage.
///
/// Expects a multipart field named `file` carrying the image bytes; the
/// part's filename participates in the triage rules.
async fn analyze_image(mut multipart: Multipart) -> Json<DefectAssessment> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let assessment = match field.bytes().await {
                        Ok(bytes) => assess_image(&filename, &bytes),
                        Err(e) => DefectAssessment::could_not_analyze(e),
                    };
                    tracing::debug!(
                        filename = %filename,
                        defect_type = %assessment.defect_type,
                        "Image triaged"
                    );
                    return Json(assessment);
                }
                // Skip unrelated fields.
            }
            Ok(None) => {
                return Json(DefectAssessment::could_not_analyze(
                    "no file field in upload",
                ));
            }
            Err(e) => return Json(DefectAssessment::could_not_analyze(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const BOUNDARY: &str = "railsight-test-boundary";

    /// Builds a multipart/form-data body with a single `file` part.
    fn multipart_body(filename: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn post_multipart(filename: &str, data: &[u8]) -> (StatusCode, DefectAssessment) {
        let app = image_routes();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze-image")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(multipart_body(filename, data)))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let assessment: DefectAssessment = serde_json::from_slice(&body).unwrap();
        (status, assessment)
    }

    #[tokio::test]
    async fn test_crack_filename_triggers_crack_label() {
        let (status, assessment) = post_multipart("crack_zone4.jpg", b"not an image").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assessment.defect_probability, 0.87);
        assert!(assessment.defect_type.contains("Crack"));
    }

    #[tokio::test]
    async fn test_undecodable_upload_returns_200_with_error_label() {
        let (status, assessment) = post_multipart("photo.png", b"garbage bytes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assessment.defect_probability, 0.0);
        assert!(assessment.defect_type.starts_with("Could not analyze: "));
    }

    #[tokio::test]
    async fn test_missing_file_field_returns_200_with_error_label() {
        let app = image_routes();
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze-image")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let assessment: DefectAssessment = serde_json::from_slice(&body).unwrap();
        assert_eq!(assessment.defect_probability, 0.0);
        assert!(assessment.defect_type.contains("no file field"));
    }
}
