use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /health — pings the pool the banner store reads from.
pub async fn health_check<S>(State(state): State<AppState<S>>) -> (StatusCode, Json<Value>) {
    let version = env!("CARGO_PKG_VERSION");
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db).await {
        tracing::error!("health check failed: {e}");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "db": e.to_string(), "version": version })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "db": "connected", "version": version })),
    )
}
