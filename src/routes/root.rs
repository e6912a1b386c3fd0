use axum::Json;

use crate::message::StatusResponse;

pub const STATUS_MESSAGE: &str = "AI Compliance API is running!";

/// Liveness check; ignores headers and query parameters.
pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}
