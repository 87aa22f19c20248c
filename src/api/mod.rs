//! HTTP API for the brand monitoring service.
//!
//! Routes:
//! - `GET /` - the monitoring UI
//! - `POST /monitor-brand/` - run a brand analysis
//! - `GET /health` - liveness probe

pub mod monitor;
pub mod types;
pub mod ui;

pub use monitor::ApiError;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::Agent;
use crate::config::Config;

use types::HealthResponse;

/// Process-wide state shared across requests.
pub struct AppState {
    pub config: Config,
    pub agent: Agent,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::serve_ui))
        .route("/monitor-brand/", post(monitor::monitor_brand))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server and serve until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let agent = Agent::new(config.clone());
    let state = Arc::new(AppState { config, agent });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// GET /health - Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
