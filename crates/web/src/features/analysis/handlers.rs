use axum::{Json, extract::State};
use storage::dto::analysis::{AnalyzeRequest, AnalyzeResponse};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Severity zone and suggested rewrite", body = AnalyzeResponse),
        (status = 400, description = "Empty or oversized text"),
        (status = 502, description = "Inference service unavailable")
    ),
    tag = "analysis"
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, WebError> {
    req.validate()?;

    let response = services::analyze_text(&state, &req.text).await?;

    Ok(Json(response))
}
