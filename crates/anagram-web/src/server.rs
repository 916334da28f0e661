use crate::routes::{anagram_routes, health_routes, word_routes};
use crate::state::AppState;
use crate::{Result, WebError};
use anagram_config::ServerConfig;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The API routes without transport layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(anagram_routes())
        .merge(word_routes())
        .with_state(state)
        .merge(health_routes())
}

fn app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = router(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }
    app
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting anagram server on http://{}", listener.local_addr()?);

    axum::serve(listener, app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
