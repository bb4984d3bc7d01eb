mod config;
mod errors;
mod inference;
mod optimize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::inference::{HostedModelClient, InferenceClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postwise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize inference client
    let inference: Arc<dyn InferenceClient> = Arc::new(HostedModelClient::new(
        config.inference_endpoint.clone(),
        config.inference_api_key.clone(),
        config.model_id.clone(),
    ));
    info!("Inference client initialized (model: {})", config.model_id);

    // Build app state
    let state = AppState {
        inference,
        config: config.clone(),
    };

    // Wildcard CORS: the API is consumed directly from browser frontends,
    // preflight OPTIONS is answered by the layer.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
