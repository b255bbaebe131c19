use std::sync::Arc;

use chat_relay::config::RelayConfig;
use chat_relay::routes;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = RelayConfig::default();
    let state = Arc::new(AppState::new(&config));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("chat relay listening at http://{}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
