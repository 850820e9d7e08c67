//! HTTP API application wiring (Axum router + middleware).
//!
//! - `routes/`: HTTP routes + handlers
//! - `extract.rs`: validating extractors for path, query and body
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use axum::Router;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app() -> Router {
    routes::router()
        .fallback(routes::system::not_found)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}
