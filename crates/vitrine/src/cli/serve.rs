//! Serve command handler.

use anyhow::Context;
use vitrine_server::{AppState, ServerConfig, create_router};

/// Handle the `serve` command
pub async fn handle_serve_command(addr_override: Option<String>) -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    let addr = addr_override.unwrap_or_else(|| config.addr().clone());

    if config.generator().api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generation will use the fallback template");
    }
    if config.publisher().token().is_none() {
        tracing::warn!("VERCEL_TOKEN is not set; deploy requests will fail until it is configured");
    }
    if let Some(origin) = config.web_origin() {
        tracing::info!(origin = %origin, "Front-end origin configured");
    }

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(addr = %addr, "Vitrine API listening");

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
