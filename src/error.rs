// src/error.rs
use thiserror::Error;

/// Terminal failure of a single relay exchange.
///
/// Every variant shares the same wire contract: the condition is logged and no
/// response bytes are ever written, leaving the caller's connection to time
/// out. Keeping the failure as an explicit value (instead of swallowing it at
/// the call site) is what lets tests assert on the failure path.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to buffer request body: {0}")]
    BodyRead(#[from] axum::Error),

    #[error("chat provider call failed: {0}")]
    Upstream(#[from] reqwest::Error),
}
