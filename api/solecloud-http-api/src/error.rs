use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use solecloud_app::{
    domain::contact::ValidationError, ports::email::SendEmailError,
    workflow::contact::submit::SubmitContactError,
};
use thiserror::Error;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    Dispatch(#[from] SendEmailError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SubmitContactError> for ApiError {
    fn from(value: SubmitContactError) -> Self {
        match value {
            SubmitContactError::Validation(e) => ApiError::Validation(e),
            SubmitContactError::Dispatch(e) => ApiError::Dispatch(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Causes stay in the log, clients only get the generic message.
        let (status, msg) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE),
            ApiError::MalformedPayload(e) => {
                log::info!("Rejected malformed contact payload: {}", e);
                (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE)
            }
            ApiError::Dispatch(_) => (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE),
            ApiError::Internal(e) => {
                log::error!("Contact request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
        };
        let body = serde_json::json!({ "error": msg });
        (status, Json(body)).into_response()
    }
}
