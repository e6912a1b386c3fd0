// src/message.rs
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `POST /api/chat`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatParams {
    pub message: Option<String>,
}

/// Built from the decoded query pairs in order. A repeated key keeps its
/// last value; unknown keys are ignored.
impl From<Vec<(String, String)>> for ChatParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let message = pairs
            .into_iter()
            .filter(|(key, _)| key == "message")
            .map(|(_, value)| value)
            .last();
        Self { message }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
}
