use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::{Category, Comment};

#[derive(FromRow)]
struct CommentRow {
    comment_id: i32,
    comment_text: String,
    comment_fake_user: String,
    comment_status: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::new(
            row.comment_id,
            row.comment_text,
            row.comment_fake_user,
            Category::parse(&row.comment_status),
        )
    }
}

/// Repository for the labelled comment pool
pub struct CommentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every comment in the pool
    pub async fn list_all(&self) -> Result<Vec<Comment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT comment_id, comment_text, comment_fake_user, comment_status
            FROM comments
            ORDER BY comment_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    /// True categories of the given comments. Unknown ids are simply absent.
    pub async fn categories_for(&self, ids: &[i32]) -> Result<HashMap<i32, Category>> {
        let rows: Vec<(i32, String)> = sqlx::query_as(
            r#"
            SELECT comment_id, comment_status
            FROM comments
            WHERE comment_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, status)| (id, Category::parse(&status)))
            .collect())
    }

    pub async fn texts_for(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
        let rows: Vec<(i32, String)> = sqlx::query_as(
            r#"
            SELECT comment_id, comment_text
            FROM comments
            WHERE comment_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
