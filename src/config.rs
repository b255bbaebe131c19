// src/config.rs
use std::net::SocketAddr;

/// Fixed deployment configuration. Nothing here is negotiated at runtime:
/// no environment variables, no config files, no CLI flags.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub listen_addr: SocketAddr,
    pub ollama_url: String,
    pub model: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            ollama_url: "http://127.0.0.1:11434".to_string(),
            model: "tinyllama".to_string(),
        }
    }
}
