use axum::{Json, extract::State};
use storage::dto::submission::{ScoreResponse, SubmissionRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission scored and recorded", body = ScoreResponse),
        (status = 400, description = "Empty submission or invalid response fields"),
        (status = 422, description = "Malformed body or unknown comment id"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "quiz"
)]
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<ScoreResponse>, WebError> {
    req.validate()?;

    let response = services::submit(state.store.as_ref(), &req).await?;

    Ok(Json(response))
}
