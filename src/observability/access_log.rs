//! Access logging middleware.
//!
//! Emits one INFO event per completed request carrying the UTC timestamp,
//! method, request target, status code, and elapsed milliseconds. The
//! response passes through untouched.

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;

pub async fn access_log(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        request_id = %request_id,
        method = %method,
        path = %target,
        status,
        duration_ms,
        "{} {} - Status: {} - {}ms",
        method,
        target,
        status,
        duration_ms
    );
    metrics::record_request(method.as_str(), status, start);

    response
}
