//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the user workflows (single-writer gate)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and body decoding helpers
//! - `errors.rs`: status + plaintext error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh in-memory store.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::AppServices::in_memory()))
}

/// Build the router over caller-provided services (tests share them).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_log))
            .layer(Extension(services)),
    )
}
