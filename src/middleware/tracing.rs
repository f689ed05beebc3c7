// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id, echoes it back, and opens one span per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use axum::body::Body;
use axum::Router;
use http::header::HeaderName;
use http::Request;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");
    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Wrap `router` with request id assignment, propagation and a trace span
///
/// A client-supplied `x-request-id` is kept; otherwise a UUID is generated.
pub fn with_request_tracing(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
