use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for the text analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 5000, message = "text must be between 1 and 5000 characters"))]
    pub text: String,
}

/// Severity assessment of a piece of text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub zone: String,
    pub likelihood: String,
    pub comment: String,
    /// Friendlier rewrite; empty when the text was not flagged
    pub suggested_text: String,
}
