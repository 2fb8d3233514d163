//! Route definitions for the Color Fun API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod cart;
mod health;
mod upload;
mod worksheets;


pub use auth::auth_routes;
pub use cart::cart_routes;
pub use upload::upload_routes;
pub use worksheets::worksheet_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let uploads_dir = state.config().uploads.dir.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        // Serve uploaded images back at their public URLs
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth::auth_routes())
        .nest("/worksheets", worksheets::worksheet_routes())
        .nest("/cart", cart::cart_routes())
        .merge(upload::upload_routes())
}
