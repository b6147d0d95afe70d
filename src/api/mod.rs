//! API module
//!
//! HTTP API endpoints and middleware.

pub mod middleware;
pub mod openapi;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa_scalar::{Scalar, Servable};

use crate::domain::MoneyHumanizer;
use crate::error::panic_response;

pub use routes::create_router;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub humanizer: Arc<dyn MoneyHumanizer>,
    pub api_version: Arc<str>,
}

impl AppState {
    pub fn new(humanizer: Arc<dyn MoneyHumanizer>, api_version: impl Into<Arc<str>>) -> Self {
        Self {
            humanizer,
            api_version: api_version.into(),
        }
    }
}

/// Build the application router
pub fn build_app(state: AppState, docs_enabled: bool) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/api/v1", create_router());

    if docs_enabled {
        router = router.merge(Scalar::with_url(
            "/docs",
            openapi::api_doc(&state.api_version),
        ));
    }

    // Note: Axum layers are applied in reverse order (last added = first executed)
    // Order: trace -> correlation -> logging -> compression -> catch panic -> handler
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CompressionLayer::new())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::correlation_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
