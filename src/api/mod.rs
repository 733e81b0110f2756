use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::summarizer::Summarizer;

pub mod handlers;
pub mod models;

pub fn create_router(summarizer: Arc<Summarizer>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/fandom", get(handlers::fandom_handler))
        .with_state(summarizer)
        .layer(cors)
}
