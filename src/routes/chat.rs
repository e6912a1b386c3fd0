use axum::{Json, extract::Query};

use crate::{
    error::AppError,
    message::{ChatParams, ChatResponse},
    services::chatbot::generate_reply,
};

pub async fn chat_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ChatResponse>, AppError> {
    let params = ChatParams::from(pairs);
    let message = params.message.ok_or(AppError::MissingField {
        location: "query",
        field: "message",
    })?;

    tracing::debug!(len = message.len(), "chat message received");

    Ok(Json(ChatResponse {
        response: generate_reply(&message),
    }))
}
