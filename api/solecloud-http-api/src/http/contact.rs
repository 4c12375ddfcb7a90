use axum::{Json, body::Bytes, extract::State};
use solecloud_app::domain::contact::ContactSubmission;

use crate::{error::ApiError, http::AppState};

#[derive(serde::Serialize)]
pub struct JsonMessageResponse {
    message: &'static str,
}

/// The body is read as JSON whatever the declared content type.
pub async fn submit_contact(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<JsonMessageResponse>, ApiError> {
    let submission: ContactSubmission = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

    let use_case = app_state.app.submit_contact_use_case.clone();
    tokio::task::spawn_blocking(move || use_case.submit(submission))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(JsonMessageResponse {
        message: "Email sent successfully",
    }))
}
