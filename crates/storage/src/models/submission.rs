use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Category;

/// A user's verdict on a comment: `like` means "not bullying".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    Like,
    Dislike,
}

impl Judgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    pub fn flags_bullying(&self) -> bool {
        matches!(self, Self::Dislike)
    }
}

/// One judgment as submitted by the client, before grading.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub comment_id: i32,
    pub judgment: Judgment,
    pub response_time_ms: f64,
}

/// A response reconciled against the comment's true category.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedResponse {
    pub comment_id: i32,
    pub judgment: Judgment,
    pub response_time_ms: f64,
    pub category: Category,
    pub correct: bool,
}

impl GradedResponse {
    pub fn grade(response: &UserResponse, category: Category) -> Self {
        let correct = response.judgment.flags_bullying() == category.is_bullying();
        Self {
            comment_id: response.comment_id,
            judgment: response.judgment,
            response_time_ms: response.response_time_ms,
            category,
            correct,
        }
    }

    pub fn correctness(&self) -> &'static str {
        if self.correct { "correct" } else { "incorrect" }
    }
}

/// Everything persisted for one scored submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub answered: i32,
    pub correct: i32,
    pub score: i32,
    pub responses: Vec<GradedResponse>,
}

/// What the store reports back after persisting a submission.
///
/// Both counts are observed in the same unit of work as the insert, so they
/// always include the submission itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedSubmission {
    pub submission_id: i32,
    pub total_submissions: i64,
    pub not_better_count: i64,
}
