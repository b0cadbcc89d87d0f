use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Which third-party integrations are configured.
#[derive(Serialize)]
pub struct IntegrationStatus {
    pub smtp: bool,
    pub recaptcha: bool,
    pub deepl: bool,
    pub seranking: bool,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub integrations: IntegrationStatus,
}

/// GET /health -- returns service status and integration configuration.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        integrations: IntegrationStatus {
            smtp: state.mailer.is_some(),
            recaptcha: state.recaptcha.is_some(),
            deepl: state.deepl.is_some(),
            seranking: state.seranking.is_configured(),
        },
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
