use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Judgment, UserResponse};
use crate::services::scoring::ScoreResult;

/// One judgment inside a submission payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResponseItem {
    pub comment_id: i32,

    pub response_status: Judgment,

    /// Time the player took to answer, in milliseconds
    #[validate(range(min = 0.0, message = "response_time must not be negative"))]
    pub response_time: f64,
}

impl From<&ResponseItem> for UserResponse {
    fn from(item: &ResponseItem) -> Self {
        Self {
            comment_id: item.comment_id,
            judgment: item.response_status,
            response_time_ms: item.response_time,
        }
    }
}

/// Request payload for scoring a batch of judgments
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmissionRequest {
    #[validate(nested)]
    pub submission: Vec<ResponseItem>,
}

impl SubmissionRequest {
    pub fn responses(&self) -> Vec<UserResponse> {
        self.submission.iter().map(UserResponse::from).collect()
    }
}

/// Score breakdown returned after a submission is recorded
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreResponse {
    /// `[comment_text, "positive" | "bullying"]` for every wrong answer
    #[schema(value_type = Vec<Vec<String>>)]
    pub mistakes: Vec<(String, String)>,
    /// Category with the highest share of wrong answers
    pub problem: Option<String>,
    pub summary: String,
    pub score: i32,
    pub answered: i32,
    pub answered_cor: i32,
    /// Share of correct answers, e.g. `"70.0%"`
    pub percent: String,
    pub submission_id: i32,
    /// Share of recorded submissions scoring at most this one, e.g. `"85.7"`
    pub comparison: String,
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        Self {
            mistakes: result
                .mistakes
                .into_iter()
                .map(|m| (m.text, m.label.to_string()))
                .collect(),
            problem: result.weakest.map(|c| c.as_str().to_string()),
            summary: result.feedback,
            score: result.score,
            answered: result.answered,
            answered_cor: result.correct,
            percent: format!("{:.1}%", result.percent),
            submission_id: result.submission_id,
            comparison: format!("{:.1}", result.comparison),
        }
    }
}
