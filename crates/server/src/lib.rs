//! Static asset server for the widget page.
//!
//! Serves the compiled frontend bundle from the configured `dist` directory
//! and exposes `/health` for readiness checks. The harness starts the same
//! router in-process for its tests.

pub mod config;

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router over a bundle directory.
pub fn app(dist: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(dist.as_ref()))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Logs every request with its status and latency.
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{} | {:>5}ms | {} {}",
        response.status().as_u16(),
        start.elapsed().as_millis(),
        method,
        path
    );
    response
}
