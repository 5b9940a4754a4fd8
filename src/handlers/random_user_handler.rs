use std::sync::Arc;

use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::lookup::random_user;
use crate::widget::Patch;

pub async fn random_user_handler(Extension(state): Extension<Arc<AppState>>) -> Json<Patch> {
    tracing::info!("Received random user request");

    let mut rng = fastrand::Rng::new();
    let transition = random_user(&state.api, &mut rng, state.options).await;
    tracing::debug!("Random user ended in {:?}", transition.phase);

    Json(transition.patch)
}
