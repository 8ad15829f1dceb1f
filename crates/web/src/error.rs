use analyzer::AnalyzerError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::{ScoringError, StorageError};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Scoring(ScoringError),
    Analyzer(AnalyzerError),
    Validation(ValidationErrors),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::Analyzer(e) => write!(f, "Analyzer error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

fn storage_response(error: &StorageError) -> (StatusCode, serde_json::Value) {
    match error {
        e if e.is_unavailable() => {
            tracing::error!("Store unavailable: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": "Service temporarily unavailable, please retry" }),
            )
        }
        StorageError::ConstraintViolation(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
        e => {
            tracing::error!("Storage error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "An internal error occurred" }),
            )
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Storage(e) | Self::Scoring(ScoringError::Storage(e)) => storage_response(e),
            Self::Scoring(e @ ScoringError::EmptySubmission) => {
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            Self::Scoring(e @ ScoringError::MissingReference { comment_id }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": e.to_string(),
                    "comment_id": comment_id
                }),
            ),
            Self::Analyzer(e) => {
                tracing::error!("Analyzer error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Text analysis is currently unavailable" }),
                )
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                let details = if field_errors.is_empty() {
                    vec![errors.to_string()]
                } else {
                    field_errors
                };

                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Validation failed",
                        "details": details
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<AnalyzerError> for WebError {
    fn from(error: AnalyzerError) -> Self {
        Self::Analyzer(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
