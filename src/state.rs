// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::ollama::OllamaClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub chat: OllamaClient,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            chat: OllamaClient::new(&config.ollama_url, &config.model),
        }
    }
}
