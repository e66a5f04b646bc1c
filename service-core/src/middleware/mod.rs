//! HTTP middleware applied to every service router.

pub mod metrics;
pub mod security_headers;
pub mod tracing;

pub use self::metrics::metrics_middleware;
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{REQUEST_ID_HEADER, RequestId, make_request_span, request_id_middleware};

use axum::{Router, body::Body, extract::DefaultBodyLimit, middleware::from_fn};
use tower_http::trace::TraceLayer;

/// Wrap a service router in the standard stack.
///
/// Outermost first: request id, HTTP trace span, metrics, security headers,
/// body size limit.
pub fn apply_standard_layers(router: Router, max_body_bytes: usize) -> Router {
    router
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
}
