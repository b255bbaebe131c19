// src/message.rs
use serde::{Deserialize, Serialize};

/// One chat-completion request to the provider: a single user turn,
/// non-streaming.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider reply envelope. Only `message.content` is relayed back.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}
