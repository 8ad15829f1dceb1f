use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Comment;

/// A comment as presented to the player. The label stays server-side.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentItem {
    pub comment_id: i32,
    pub comment_text: String,
    pub comment_fake_name: String,
}

impl From<Comment> for CommentItem {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            comment_text: comment.text,
            comment_fake_name: comment.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentListResponse {
    #[serde(rename = "Comments")]
    pub comments: Vec<CommentItem>,
}

impl From<Vec<Comment>> for CommentListResponse {
    fn from(comments: Vec<Comment>) -> Self {
        Self {
            comments: comments.into_iter().map(CommentItem::from).collect(),
        }
    }
}
