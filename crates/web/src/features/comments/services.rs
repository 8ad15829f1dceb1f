use storage::{Store, dto::comment::CommentListResponse, error::Result, services::sampler};

/// Comment pool in presentation order, with labels stripped for the client
pub async fn list_comments(store: &dyn Store) -> Result<CommentListResponse> {
    let comments = sampler::sample_comments(store).await?;
    let positive = comments
        .iter()
        .filter(|c| !c.category.is_bullying())
        .count();

    tracing::debug!(
        total = comments.len(),
        positive,
        "Serving comment pool"
    );

    Ok(CommentListResponse::from(comments))
}

#[cfg(test)]
mod tests {
    use storage::{
        InMemoryStore,
        models::{Category, Comment},
    };

    use super::*;

    #[tokio::test]
    async fn test_list_comments_covers_the_pool() {
        let store = InMemoryStore::with_comments(vec![
            Comment::new(1, "nice shot", "ana", Category::Positive),
            Comment::new(2, "you are so old", "bo", Category::Age),
        ]);

        let response = list_comments(&store).await.unwrap();

        let mut ids: Vec<i32> = response.comments.iter().map(|c| c.comment_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }
}
