use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::Config;
use crate::shared::logger::request_logger;

/// All application routes
///
/// `/app/*` serves views and images, everything else unknown falls back
/// to the frontend bundle.
pub fn configure_routes(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/version", get(handlers::app_info::version))
        .nest_service("/app", ServeDir::new(config.app_dir()))
        .fallback_service(ServeDir::new(config.dist_dir()))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
