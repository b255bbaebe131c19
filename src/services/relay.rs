// src/services/relay.rs
use crate::error::RelayError;
use crate::services::ollama::OllamaClient;

/// Best-effort unwrap of the inbound body.
///
/// The client page wraps the user's text in a JSON string before posting it.
/// If the body parses as a top-level JSON string the inner text is forwarded;
/// anything else (bare text, JSON objects, empty bodies) is forwarded verbatim
/// as opaque text. This step never rejects a request.
pub fn extract_prompt(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        _ => String::from_utf8_lossy(body).into_owned(),
    }
}

/// One relay exchange: unwrap the buffered body and invoke the chat provider
/// exactly once. `Err` is the terminal failure state of the exchange; the
/// HTTP layer turns it into "no bytes sent".
pub async fn relay_message(chat: &OllamaClient, body: &[u8]) -> Result<String, RelayError> {
    let prompt = extract_prompt(body);
    let reply = chat.chat(&prompt).await?;
    tracing::debug!(reply_len = reply.len(), "provider reply received");
    Ok(reply)
}
