//! Application startup and lifecycle management.

use crate::config::LanguageConfig;
use crate::ApiDoc;
use crate::handlers::{chat_agent, health_check, metrics_endpoint, readiness_check};
use crate::services::{ChatAgent, PlaceholderAgent};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::apply_standard_layers;
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: LanguageConfig,
    pub agent: Arc<dyn ChatAgent>,
}

impl AppState {
    pub fn new(config: LanguageConfig, agent: Arc<dyn ChatAgent>) -> Self {
        Self { config, agent }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.limits.max_body_bytes;

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/chat/agent", post(chat_agent))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state);

    apply_standard_layers(router, max_body_bytes)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: LanguageConfig) -> Result<Self, AppError> {
        let agent: Arc<dyn ChatAgent> = Arc::new(PlaceholderAgent::new());
        tracing::info!(backend = agent.name(), "Chat agent initialized");

        Self::build_with_agent(config, agent).await
    }

    /// Build the application around a specific agent backend.
    pub async fn build_with_agent(
        config: LanguageConfig,
        agent: Arc<dyn ChatAgent>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Language service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, agent),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
