use std::collections::HashMap;

use async_trait::async_trait;

use super::Store;
use crate::Database;
use crate::error::Result;
use crate::models::{Category, Comment, MessageRecord, NewSubmission, RecordedSubmission};
use crate::repository::{
    comment::CommentRepository, message::MessageRepository, submission::SubmissionRepository,
};

/// [`Store`] backed by the PostgreSQL database.
#[derive(Clone)]
pub struct PgStore {
    db: Database,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn fetch_all_comments(&self) -> Result<Vec<Comment>> {
        CommentRepository::new(self.db.pool()).list_all().await
    }

    async fn lookup_categories(&self, ids: &[i32]) -> Result<HashMap<i32, Category>> {
        CommentRepository::new(self.db.pool())
            .categories_for(ids)
            .await
    }

    async fn lookup_texts(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
        CommentRepository::new(self.db.pool()).texts_for(ids).await
    }

    async fn record_submission(&self, submission: &NewSubmission) -> Result<RecordedSubmission> {
        SubmissionRepository::new(self.db.pool())
            .record(submission)
            .await
    }

    async fn log_analysis(&self, message: &MessageRecord) -> Result<()> {
        MessageRepository::new(self.db.pool())
            .insert(message)
            .await?;
        Ok(())
    }
}
