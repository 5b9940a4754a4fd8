use std::sync::Arc;

use axum::extract::Query;
use axum::{Extension, Json};

use super::UsernameQuery;
use crate::app_state::AppState;
use crate::lookup::search;
use crate::widget::Patch;

pub async fn search_handler(
    Query(query): Query<UsernameQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Patch> {
    tracing::info!("Received search");

    let transition = search(&state.api, &query.username, state.options).await;
    tracing::debug!("Search ended in {:?}", transition.phase);

    Json(transition.patch)
}
