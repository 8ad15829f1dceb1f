use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{Result, StorageError};
use crate::models::{GradedResponse, NewSubmission, RecordedSubmission};

/// Repository for scored submissions and their responses
pub struct SubmissionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a submission with all of its responses, then count the history
    /// it is compared against. Nothing is visible to other connections until
    /// the whole unit commits.
    pub async fn record(&self, submission: &NewSubmission) -> Result<RecordedSubmission> {
        let mut tx = self.pool.begin().await?;

        let submission_id = self.insert_summary(submission, &mut tx).await?;

        for response in &submission.responses {
            self.insert_response(submission_id, response, &mut tx)
                .await
                .map_err(|e| {
                    if e.is_foreign_key_violation() {
                        StorageError::ConstraintViolation(format!(
                            "Comment {} no longer exists",
                            response.comment_id
                        ))
                    } else {
                        e
                    }
                })?;
        }

        let total_submissions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
            .fetch_one(&mut *tx)
            .await?;

        let not_better_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM submissions WHERE sub_correct_score <= $1",
        )
        .bind(submission.score)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            submission_id,
            total_submissions,
            not_better_count,
            "Submission recorded"
        );

        Ok(RecordedSubmission {
            submission_id,
            total_submissions,
            not_better_count,
        })
    }

    async fn insert_summary(
        &self,
        submission: &NewSubmission,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i32> {
        let submission_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO submissions (sub_answered, sub_correct, sub_correct_score)
            VALUES ($1, $2, $3)
            RETURNING submission_id
            "#,
        )
        .bind(submission.answered)
        .bind(submission.correct)
        .bind(submission.score)
        .fetch_one(&mut **tx)
        .await?;

        Ok(submission_id)
    }

    async fn insert_response(
        &self,
        submission_id: i32,
        response: &GradedResponse,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO responses (comment_id, submission_id, response_status, response_time, correctness)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(response.comment_id)
        .bind(submission_id)
        .bind(response.judgment.as_str())
        .bind(response.response_time_ms)
        .bind(response.correctness())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
