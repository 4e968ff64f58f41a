//! Script execution: operation dispatch through to the JSON response.

use std::time::{Duration, Instant};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use crate::config::ConnectorConfig;
use crate::connector::context::ScriptContext;
use crate::connector::operation::Operation;
use crate::connector::request::MatchRequest;
use crate::connector::response::{json_response, IsMatchBody, MatchBody};
use crate::error::ConnectorError;
use crate::matcher;
use crate::observability::metrics;

/// Run one script invocation. Never fails: every error becomes a response.
pub async fn execute(ctx: ScriptContext, config: &ConnectorConfig) -> Response {
    let start_time = Instant::now();
    let span = tracing::info_span!(
        "script",
        correlation_id = %ctx.correlation_id,
        operation_id = %ctx.operation_id,
    );

    async move {
        let operation_label = ctx
            .operation_id
            .parse::<Operation>()
            .map(Operation::id)
            .unwrap_or("unknown");

        let timeout = Duration::from_secs(config.timeouts.request_secs);
        let result = match tokio::time::timeout(timeout, run(ctx, config)).await {
            Ok(result) => result,
            Err(_) => Err(ConnectorError::Timeout(config.timeouts.request_secs)),
        };

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!(kind = e.kind(), error = %e, "Script failed");
                } else {
                    tracing::warn!(kind = e.kind(), error = %e, "Script rejected request");
                }
                e.into_response()
            }
        };

        metrics::record_request(operation_label, response.status().as_u16(), start_time);
        response
    }
    .instrument(span)
    .await
}

async fn run(ctx: ScriptContext, config: &ConnectorConfig) -> Result<Response, ConnectorError> {
    let operation: Operation = ctx.operation_id.parse()?;
    let body = ctx.read_body(config.limits.max_body_bytes).await?;
    let request = MatchRequest::parse(operation, &body)?;

    tracing::debug!(
        option = %request.option,
        text_len = request.text_to_check.len(),
        "Compiling pattern"
    );
    let regex = matcher::compile(&request.pattern, request.option, &config.matcher)?;

    let response = match operation {
        Operation::IsMatch => {
            let result = matcher::is_match(&regex, &request.text_to_check);
            tracing::debug!(is_match = result.is_match, "Single match complete");
            json_response(StatusCode::OK, &IsMatchBody::new(request.text_to_check, result))
        }
        Operation::Match => {
            let result = matcher::find_all(&regex, &request.text_to_check);
            tracing::debug!(matched_count = result.count, "Global match complete");
            json_response(StatusCode::OK, &MatchBody::new(request.text_to_check, result))
        }
    };

    Ok(response)
}
