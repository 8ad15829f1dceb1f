use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::comments::handlers::list_comments,
        features::submissions::handlers::submit,
        features::analysis::handlers::analyze_text,
    ),
    components(
        schemas(
            storage::dto::comment::CommentItem,
            storage::dto::comment::CommentListResponse,
            storage::dto::submission::ResponseItem,
            storage::dto::submission::SubmissionRequest,
            storage::dto::submission::ScoreResponse,
            storage::dto::analysis::AnalyzeRequest,
            storage::dto::analysis::AnalyzeResponse,
            storage::models::Judgment,
        )
    ),
    tags(
        (name = "quiz", description = "Comment quiz endpoints"),
        (name = "analysis", description = "Message analysis endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/api/comments", "/api/submissions", "/api/analyze"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
