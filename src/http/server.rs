//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, panic recovery, correlation ID)
//! - Bind server to listener
//! - Hand each invocation to the connector script

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::{CatchPanicLayer, ResponseForPanic},
    trace::TraceLayer,
};

use crate::config::ConnectorConfig;
use crate::connector::{self, ScriptContext};
use crate::connector::response::json_response;
use crate::error::ConnectorError;
use crate::http::request::{
    correlation_id, propagate_correlation_id_layer, set_correlation_id_layer,
};
use crate::lifecycle::Shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConnectorConfig>,
    pub shutdown: Shutdown,
}

/// HTTP server for the regex connector.
pub struct HttpServer {
    router: Router,
    config: Arc<ConnectorConfig>,
    shutdown: Shutdown,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ConnectorConfig, shutdown: Shutdown) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            shutdown: shutdown.clone(),
        };

        let router = Self::build_router(state);
        Self {
            router,
            config,
            shutdown,
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Body size and request timeout are enforced inside the script run so
    /// that their failures share the JSON error body.
    fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .route("/operations/{operation_id}", post(operation_handler))
            .route("/health", get(health_handler))
            .with_state(state);
        with_middleware(router)
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let mut shutdown_rx = self.shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(PanicResponse))
        .layer(propagate_correlation_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_correlation_id_layer())
}

/// Turns a handler panic into a JSON 500.
#[derive(Debug, Clone, Copy)]
struct PanicResponse;

impl ResponseForPanic for PanicResponse {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "handler panicked".to_string()
        };
        tracing::error!(panic = %detail, "Handler panicked");
        ConnectorError::Internal(detail).into_response()
    }
}

/// Runs the connector script for `operation_id`.
async fn operation_handler(
    State(state): State<AppState>,
    Path(operation_id): Path<String>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let ctx = ScriptContext::new(
        correlation_id(&headers),
        operation_id,
        body,
        state.shutdown.cancellation(),
    );
    connector::execute(ctx, &state.config).await
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        &HealthStatus {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}
