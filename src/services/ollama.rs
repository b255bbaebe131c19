// src/services/ollama.rs
use crate::error::RelayError;
use crate::message::{ChatMessage, ChatRequest, ChatResponse};

/// Client for the Ollama chat endpoint. One instance lives in app state and is
/// shared by every connection; `reqwest::Client` pools connections internally.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Send `prompt` as a single user-role message and return the assistant
    /// reply text. No retries, no deadline: a hung provider hangs the caller.
    pub async fn chat(&self, prompt: &str) -> Result<String, RelayError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        Ok(response.message.content)
    }
}
