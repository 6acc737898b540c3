use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status, 503 when the record store is unreachable
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, database) = match state.profiles.ping().await {
        Ok(()) => (StatusCode::OK, "operational"),
        Err(e) => {
            log::warn!("Health check: database ping failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let uploads = match tokio::fs::metadata(state.uploads.dir()).await {
        Ok(meta) if meta.is_dir() => "operational",
        _ => "missing",
    };

    let health = json!({
        "status": if status == StatusCode::OK { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "backend": state.profiles.backend_name(),
            "uploads": uploads,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the record store answer?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.profiles.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response(),
    }
}
