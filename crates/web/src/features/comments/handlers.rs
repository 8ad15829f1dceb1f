use axum::{Json, extract::State};
use storage::dto::comment::CommentListResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "Whole comment pool, shuffled in balanced blocks", body = CommentListResponse),
        (status = 503, description = "Database unavailable")
    ),
    tag = "quiz"
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<CommentListResponse>, WebError> {
    let response = services::list_comments(state.store.as_ref()).await?;

    Ok(Json(response))
}
