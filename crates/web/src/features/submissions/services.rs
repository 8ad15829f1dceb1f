use storage::{
    Store,
    dto::submission::{ScoreResponse, SubmissionRequest},
    error::ScoringError,
    services::scoring,
};

/// Grade, persist and rank a submission, shaped for the wire
pub async fn submit(
    store: &dyn Store,
    request: &SubmissionRequest,
) -> Result<ScoreResponse, ScoringError> {
    let responses = request.responses();

    let result = match scoring::score_submission(store, &responses).await {
        Ok(result) => result,
        Err(e @ (ScoringError::EmptySubmission | ScoringError::MissingReference { .. })) => {
            tracing::info!(answered = responses.len(), "Submission rejected: {}", e);
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    Ok(ScoreResponse::from(result))
}

#[cfg(test)]
mod tests {
    use storage::{
        InMemoryStore,
        dto::submission::ResponseItem,
        models::{Category, Comment, Judgment},
    };

    use super::*;

    fn item(comment_id: i32, response_status: Judgment) -> ResponseItem {
        ResponseItem {
            comment_id,
            response_status,
            response_time: 900.0,
        }
    }

    #[tokio::test]
    async fn test_submit_formats_score() {
        let store = InMemoryStore::with_comments(vec![
            Comment::new(1, "nice shot", "ana", Category::Positive),
            Comment::new(2, "you are so old", "bo", Category::Age),
            Comment::new(3, "go back home", "cy", Category::Nationality),
        ]);
        let request = SubmissionRequest {
            submission: vec![
                item(1, Judgment::Like),
                item(2, Judgment::Like),
                item(3, Judgment::Dislike),
            ],
        };

        let response = submit(&store, &request).await.unwrap();

        assert_eq!(response.answered_cor, 2);
        assert_eq!(response.score, 15);
        assert_eq!(response.percent, "66.7%");
        assert_eq!(response.problem.as_deref(), Some("age"));
        assert_eq!(
            response.mistakes,
            vec![("you are so old".to_string(), "bullying".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_comment() {
        let store = InMemoryStore::new();
        let request = SubmissionRequest {
            submission: vec![item(5, Judgment::Like)],
        };

        let result = submit(&store, &request).await;

        assert!(matches!(
            result,
            Err(ScoringError::MissingReference { comment_id: 5 })
        ));
        assert_eq!(store.submission_count(), 0);
    }
}
