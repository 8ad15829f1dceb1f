use sqlx::PgPool;

use crate::error::Result;
use crate::models::MessageRecord;

/// Repository for the text-analysis log
pub struct MessageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, message: &MessageRecord) -> Result<i32> {
        let message_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (
                text, is_bullying, toxicity_score, sentiment_score, suggested_text,
                person_or_pronoun, classifier_score, zone, likelihood, comment
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING message_id
            "#,
        )
        .bind(&message.text)
        .bind(message.is_bullying)
        .bind(message.toxicity_score)
        .bind(message.sentiment_score)
        .bind(&message.suggested_text)
        .bind(message.person_or_pronoun)
        .bind(message.classifier_score)
        .bind(&message.zone)
        .bind(&message.likelihood)
        .bind(&message.comment)
        .fetch_one(self.pool)
        .await?;

        Ok(message_id)
    }
}
