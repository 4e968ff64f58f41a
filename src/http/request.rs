//! Correlation ID handling.
//!
//! # Responsibilities
//! - Generate a correlation ID (UUID v4) when the caller sends none
//! - Echo the correlation ID on the response
//! - Expose it to handlers as a plain string
//!
//! # Design Decisions
//! - Correlation ID added as early as possible for tracing
//! - A caller-supplied `x-correlation-id` is kept as-is

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

pub const X_CORRELATION_ID: HeaderName = HeaderName::from_static("x-correlation-id");

/// Generates UUID v4 correlation IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeCorrelationId;

impl MakeRequestId for MakeCorrelationId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Layer that stamps requests lacking a correlation ID.
pub fn set_correlation_id_layer() -> SetRequestIdLayer<MakeCorrelationId> {
    SetRequestIdLayer::new(X_CORRELATION_ID, MakeCorrelationId)
}

/// Layer that copies the correlation ID onto the response.
pub fn propagate_correlation_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_CORRELATION_ID)
}

/// Read the correlation ID from request headers.
pub fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(&X_CORRELATION_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generated_ids_are_uuids() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let id = MakeCorrelationId.make_request_id(&req).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[test]
    fn test_correlation_id_lookup() {
        let mut headers = HeaderMap::new();
        assert_eq!(correlation_id(&headers), "unknown");

        headers.insert(X_CORRELATION_ID, HeaderValue::from_static("abc-123"));
        assert_eq!(correlation_id(&headers), "abc-123");
    }
}
