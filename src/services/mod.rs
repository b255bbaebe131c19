pub mod ollama;
pub mod relay;
