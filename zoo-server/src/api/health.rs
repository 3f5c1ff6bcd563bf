//! 健康检查路由
//!
//! ```json
//! { "status": "ok", "db": true, "version": "0.1.0" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    /// Whether a pooled connection could be acquired
    db: bool,
    version: &'static str,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_ok = state.pool.acquire().await.is_ok();
    if !db_ok {
        tracing::warn!("Health check: database unavailable");
    }
    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        db: db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}
