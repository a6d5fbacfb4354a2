//! Request logging: one line per request with method, path, status and latency.

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the id the request was logged under.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    span.in_scope(|| {
        tracing::info!(status = status.as_u16(), elapsed_ms, "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
