use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod auth;
pub mod config;
pub mod errors;
pub mod headers;
pub mod html;
pub mod http;
pub mod identity;
pub mod logging;

use identity::ServiceIdentity;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<ServiceIdentity>,
}

impl AppState {
    pub fn new(identity: ServiceIdentity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::root))
        .route("/html", get(http::handlers::html_page))
        .route("/health", get(http::handlers::health))
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
