use std::time::Instant;

use axum::{extract::Request, http::HeaderName, middleware::Next, response::Response};
use tracing::Instrument;

use crate::context::{RequestId, REQUEST_ID_HEADER};

/// Tag each request with a [`RequestId`], run it inside a span, log the
/// outcome, and echo the id in the `x-request-id` response header.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let request_id = RequestId::new();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("request", %request_id, %method, %path);

    let started = Instant::now();
    let mut res = next.run(req).instrument(span.clone()).await;
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    span.in_scope(|| {
        let status = res.status().as_u16();
        if res.status().is_server_error() {
            tracing::error!(status, latency_ms, "request failed");
        } else {
            tracing::info!(status, latency_ms, "request completed");
        }
    });

    res.headers_mut().insert(
        HeaderName::from_static(REQUEST_ID_HEADER),
        request_id.to_header_value(),
    );
    res
}
