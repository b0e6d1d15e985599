// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    // A missing field and an explicit null both land here as None; the
    // message is forwarded as-is either way.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}
