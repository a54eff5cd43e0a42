//! Request tracing middleware.
//!
//! Provides request ID extraction and generation for log correlation.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request ID stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Middleware that extracts or generates a request ID.
///
/// If the `X-Request-ID` header is present, uses that value.
/// Otherwise, generates a new UUID v4.
///
/// The request ID is stored in request extensions, added to the response
/// headers, and attached to the request's tracing span.
pub async fn trace_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let _guard = span.enter();
    let start = std::time::Instant::now();

    let mut response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!(
        request_id = %request_id,
        status = status,
        duration_ms = duration_ms,
        "Request completed"
    );

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), header_value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Extensions;

    #[test]
    fn test_request_id_struct() {
        let id = RequestId("test-id-123".to_string());
        assert_eq!(id.0, "test-id-123");
    }

    #[test]
    fn test_request_id_in_extensions() {
        let mut extensions = Extensions::new();
        extensions.insert(RequestId("my-request-id".to_string()));
        assert_eq!(
            extensions.get::<RequestId>().map(|r| r.0.as_str()),
            Some("my-request-id")
        );
    }

    #[test]
    fn test_request_id_header_constant() {
        assert_eq!(REQUEST_ID_HEADER, "X-Request-ID");
    }
}
