// src/routes/mod.rs
pub mod chat;
pub mod root;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use root::root_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

pub fn create_router() -> Router {
    // The 405 fallback only applies to routes registered before it.
    Router::new()
        .route("/", get(root_handler))
        .route("/api/chat", post(chat_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
