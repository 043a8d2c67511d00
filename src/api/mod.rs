mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::gateway::Gateway;

pub use middleware::{ALLOW_HEADERS, ALLOW_METHODS};

pub fn create_router(gateway: Gateway) -> Router {
    let api = Router::new()
        // Short-code menu channel
        .route(
            "/ussd",
            post(handlers::session).options(middleware::preflight),
        )
        // Message channel
        .route(
            "/sms",
            post(handlers::message).options(middleware::preflight),
        )
        // Health
        .route(
            "/health",
            get(handlers::health).options(middleware::preflight),
        );

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::map_response(middleware::allow_any_origin)),
        )
        .with_state(Arc::new(gateway))
}
