mod page_handler;
mod random_user_handler;
mod search_handler;
mod validate_handler;

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use page_handler::page_handler;
use random_user_handler::random_user_handler;
use search_handler::search_handler;
use validate_handler::validate_handler;

#[derive(Debug, serde::Deserialize)]
pub struct UsernameQuery {
    #[serde(default)]
    username: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/validate", get(validate_handler))
        .route("/api/search", get(search_handler))
        .route("/api/random", get(random_user_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
