//! HTTP-Endpunkte des Gate-Servers (axum).
//!
//! Endpunkte:
//! - GET  /api/health           - Health-Check mit Zeitstempel
//! - POST /api/verify-password  - Muster-Hash gegen Geheimnis prüfen

pub mod config;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use dotgrid_engine::{SecretConfig, VerifyOutcome, VerifyRequest, VerifyResponse};

pub use config::{ServerConfig, DEFAULT_BIND, SECRET_ENV_VAR};

/// Geteilter Server-Zustand: das einmalig gelesene Geheimnis.
pub type SharedSecret = Arc<SecretConfig>;

/// Baut den axum-Router mit allen Endpunkten.
pub fn router(secret: SecretConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/verify-password", post(verify_password))
        .with_state(Arc::new(secret));

    Router::new().nest("/api", api)
}

/// Bindet den Listener und bedient Anfragen bis Ctrl+C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!("Gate-Server lauscht auf http://{}", listener.local_addr()?);

    axum::serve(listener, router(config.secret))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Gate-Server beendet");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Ctrl+C-Handler konnte nicht installiert werden: {}", e);
    }
}

// ── Request / Response types ────────────────────────────────────────

/// Antwort von `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Immer `"ok"`
    pub status: String,
    /// Serverzeit als ISO-8601 (UTC, Millisekunden)
    pub timestamp: String,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn verify_password(
    State(secret): State<SharedSecret>,
    Json(req): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    let response = secret.verify(req.hash);

    match VerifyOutcome::from_response(&response) {
        VerifyOutcome::Accepted => log::info!("Muster akzeptiert"),
        VerifyOutcome::Rejected => log::info!("Muster abgelehnt"),
        VerifyOutcome::Failed(failure) => log::warn!("Verifikation nicht möglich: {}", failure),
    }

    Json(response)
}
