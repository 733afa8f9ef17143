//! HTTP API
//!
//! Thin JSON transport over the planning service. No auth, no versioning;
//! the server is a single-user local companion.

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::Planner;

pub fn create_router(planner: Planner) -> Router {
    let api = Router::new()
        .route("/plan", post(handlers::generate_plan))
        .route("/task/breakdown", post(handlers::break_down_task))
        .route("/execute", post(handlers::execute_task))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(planner)
}
