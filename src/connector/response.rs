//! Response bodies and JSON encoding.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;

use crate::matcher::{GlobalMatch, MatchedItem, SingleMatch};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SERIALIZE_FAILURE_BODY: &str = r#"{"error":"Internal error: failed to serialize response"}"#;

/// Message attached to a global match that found nothing.
pub const NO_MATCH_MESSAGE: &str = "No matches found.";

/// Body of a `RegexIsMatch` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsMatchBody {
    pub text_to_check: String,
    pub is_match: bool,
    pub matched_data: Vec<String>,
}

impl IsMatchBody {
    pub fn new(text_to_check: String, result: SingleMatch) -> Self {
        Self {
            text_to_check,
            is_match: result.is_match,
            matched_data: result.matched_data,
        }
    }
}

/// Body of a `RegexMatch` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBody {
    pub text_to_check: String,
    pub matched_count: usize,
    pub matched_data: Vec<MatchedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl MatchBody {
    pub fn new(text_to_check: String, result: GlobalMatch) -> Self {
        let message = (result.count == 0).then_some(NO_MATCH_MESSAGE);
        Self {
            text_to_check,
            matched_count: result.count,
            matched_data: result.matched_data,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `body` into a JSON response with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            let mut response = Response::new(Body::from(SERIALIZE_FAILURE_BODY));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
            response
        }
    }
}
