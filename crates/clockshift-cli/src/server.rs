//! HTTP transport: `POST /convert` with a JSON conversion request.
//!
//! The router holds no state; every request is one independent call into
//! [`clockshift::handle_json`].

use anyhow::{Context, Result};
use axum::{body::Bytes, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;

/// Bind address for the service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub fn router() -> Router {
    // Calendar front-ends call from their own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/convert", post(convert))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// POST /convert - answer one conversion request
///
/// The body is read raw so malformed JSON gets the same `{"error"}` shape as
/// every other rejection.
async fn convert(body: Bytes) -> impl IntoResponse {
    let body = String::from_utf8_lossy(&body);
    let reply = clockshift::handle_json(&body);

    if reply.is_success() {
        info!(response = %reply.body, "converted");
    } else {
        warn!(status = reply.status, response = %reply.body, "rejected");
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(reply.body))
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %listener.local_addr()?, "clockshift listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
