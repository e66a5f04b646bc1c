//! Application startup and lifecycle management.

use crate::config::VisionConfig;
use crate::ApiDoc;
use crate::handlers::{analyze_condition, health_check, metrics_endpoint, readiness_check};
use crate::services::{ConditionAnalyzer, PlaceholderAnalyzer};
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
    pub config: VisionConfig,
    pub analyzer: Arc<dyn ConditionAnalyzer>,
}

impl AppState {
    pub fn new(config: VisionConfig, analyzer: Arc<dyn ConditionAnalyzer>) -> Self {
        Self { config, analyzer }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.limits.max_body_bytes;

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route("/analyze/condition", post(analyze_condition))
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
    pub async fn build(config: VisionConfig) -> Result<Self, AppError> {
        let analyzer: Arc<dyn ConditionAnalyzer> = Arc::new(PlaceholderAnalyzer::new());
        tracing::info!(analyzer = analyzer.name(), "Condition analyzer initialized");

        Self::build_with_analyzer(config, analyzer).await
    }

    pub async fn build_with_analyzer(
        config: VisionConfig,
        analyzer: Arc<dyn ConditionAnalyzer>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Vision service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, analyzer),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
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
