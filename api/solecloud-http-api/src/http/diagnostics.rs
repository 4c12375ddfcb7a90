use axum::{Json, extract::State};

use crate::http::AppState;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMailStatusResponse {
    message: &'static str,
    email_user: bool,
    email_password: bool,
    environment: String,
}

pub async fn get_mail_status(State(app_state): State<AppState>) -> Json<JsonMailStatusResponse> {
    let status = app_state.app.mail_status_use_case.status();
    Json(JsonMailStatusResponse {
        message: "API route is working",
        email_user: status.email_user_set,
        email_password: status.email_password_set,
        environment: status.environment,
    })
}
