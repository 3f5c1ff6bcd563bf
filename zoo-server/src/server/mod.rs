//! Server Implementation
//!
//! HTTP 服务器启动和管理

pub mod config;
pub mod middleware;
pub mod state;

pub use config::{Config, ConfigError, LogFormat};
pub use state::AppState;

use std::net::SocketAddr;

use crate::api;
use crate::utils::{AppError, AppResult};

/// HTTP Server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    pub fn new(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.config.http_host, self.config.http_port)
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> AppResult<()> {
        let addr = self.addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("Zoo server listening on http://{}", addr);

        let app = api::build_app(self.state);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Internal(format!("HTTP server error: {e}")))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
