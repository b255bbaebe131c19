// src/routes/mod.rs
pub mod relay;

use crate::state::SharedState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    // Every method on every path lands on the relay; there is no route table.
    // CorsLayer::permissive() stamps `access-control-allow-origin: *` on each
    // response the relay actually sends.
    Router::new()
        .fallback(relay::relay_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
