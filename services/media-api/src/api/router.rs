use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers;
use super::ApiState;

pub fn create_router(state: Arc<ApiState>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_secs,
        )));

    Router::new()
        .route(
            "/api/media",
            get(handlers::list_media).post(handlers::create_media),
        )
        .route("/api/media/storage-summary", get(handlers::storage_summary))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(middleware)
}
