// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required field `{field}` in {location}")]
    MissingField {
        location: &'static str,
        field: &'static str,
    },

    #[error("route not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

/// One entry of a validation error body.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    loc: Vec<&'static str>,
    msg: String,
    #[serde(rename = "type")]
    kind: &'static str,
    input: Value,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn body(&self) -> Value {
        match self {
            AppError::MissingField { location, field } => {
                let detail = ErrorDetail {
                    loc: vec![*location, *field],
                    msg: "Field required".to_string(),
                    kind: "missing",
                    input: Value::Null,
                };
                json!({ "detail": [detail] })
            }
            AppError::NotFound => json!({ "detail": "Not Found" }),
            AppError::MethodNotAllowed => json!({ "detail": "Method Not Allowed" }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, AppError::MissingField { .. }) {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
