use axum::extract::Query;
use axum::Json;

use super::UsernameQuery;
use crate::validator::validate_username;
use crate::widget::Patch;

pub async fn validate_handler(Query(query): Query<UsernameQuery>) -> Json<Patch> {
    Json(Patch::validation(
        &query.username,
        &validate_username(&query.username),
    ))
}
