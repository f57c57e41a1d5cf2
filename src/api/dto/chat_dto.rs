//! Chat DTOs

use serde::{Deserialize, Serialize};

use crate::models::conversation::ChatMessage;

/// Chat request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    /// User message
    pub message: String,
    /// Prior turns, oldest first
    pub history: Vec<ChatMessage>,
}

/// Chat response; the reply's origin is never exposed
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
