//! Per-invocation script context.
//!
//! Carries what a connector host hands to a script: the correlation and
//! operation identifiers, the inbound body, and a cancellation signal.

use axum::body::{Body, Bytes};
use tokio::sync::broadcast;

use crate::error::ConnectorError;

/// Cancellation signal observed while the body is being read.
pub struct Cancellation {
    rx: Option<broadcast::Receiver<()>>,
}

impl Cancellation {
    pub fn new(rx: broadcast::Receiver<()>) -> Self {
        Self { rx: Some(rx) }
    }

    /// A signal that never fires.
    pub fn never() -> Self {
        Self { rx: None }
    }

    /// Resolve once cancellation is requested.
    ///
    /// A closed channel (sender dropped) never resolves.
    pub async fn cancelled(&mut self) {
        match self.rx.as_mut() {
            Some(rx) => match rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => std::future::pending::<()>().await,
            },
            None => std::future::pending::<()>().await,
        }
    }
}

/// Everything a single script run needs.
pub struct ScriptContext {
    pub correlation_id: String,
    pub operation_id: String,
    body: Body,
    cancellation: Cancellation,
}

impl ScriptContext {
    pub fn new(
        correlation_id: impl Into<String>,
        operation_id: impl Into<String>,
        body: Body,
        cancellation: Cancellation,
    ) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            operation_id: operation_id.into(),
            body,
            cancellation,
        }
    }

    /// Read the whole body, giving up early if the caller cancels.
    pub async fn read_body(self, limit: usize) -> Result<Bytes, ConnectorError> {
        let Self {
            body,
            mut cancellation,
            ..
        } = self;

        tokio::select! {
            result = axum::body::to_bytes(body, limit) => {
                result.map_err(|e| ConnectorError::Body(e.to_string()))
            }
            _ = cancellation.cancelled() => Err(ConnectorError::Cancelled),
        }
    }
}
