// src/routes/relay.rs
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::RelayError;
use crate::services::relay::relay_message;
use crate::state::SharedState;

pub async fn relay_handler(State(state): State<SharedState>, req: Request) -> Response {
    let request_id = Uuid::new_v4();
    info!(%request_id, method = %req.method(), path = %req.uri().path(), "inbound request");

    let body = match to_bytes(req.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let err = RelayError::from(err);
            error!(%request_id, error = %err, "failed to buffer request body, dropping connection");
            return drop_without_reply().await;
        }
    };

    match relay_message(&state.chat, &body).await {
        Ok(reply) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], reply).into_response()
        }
        Err(err) => {
            error!(%request_id, error = %err, "relay exchange failed, dropping connection");
            drop_without_reply().await
        }
    }
}

/// The failure contract is "no bytes at all": the exchange parks here forever
/// and the caller's connection is left to time out. Only this connection's
/// task is affected.
async fn drop_without_reply() -> Response {
    std::future::pending::<()>().await;
    unreachable!("pending future resolved")
}
