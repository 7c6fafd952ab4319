//! Access log middleware.
//!
//! Each request runs inside an `http_request` span carrying the method, path
//! and request id; `user_id` is filled in by the auth middleware when the
//! route is protected.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{field, info_span, Instrument};

use super::RequestId;

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        user_id = field::Empty,
    );

    async move {
        let start = Instant::now();
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = start.elapsed().as_millis() as u64;

        if response.status().is_server_error() {
            tracing::error!(status, duration_ms, "Request failed");
        } else if response.status().is_client_error() {
            tracing::warn!(status, duration_ms, "Request rejected");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }
        response
    }
    .instrument(span)
    .await
}
